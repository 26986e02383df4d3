//! End-to-end run: read input, extract, describe, classify, write.

use std::fs;
use std::path::Path;

use crate::category::Category;
use crate::classify::GroupedHandles;
use crate::config::YthConfig;
use crate::describe::build_descriptions;
use crate::error::{PipelineError, Result};
use crate::extract::extract_handles;
use crate::storage;

/// Counts reported after a successful run.
#[derive(Debug)]
pub struct RunSummary {
    /// Distinct handles found in the input (equals lines written).
    pub unique_handles: usize,
    /// Handles per category, in output (category-name) order.
    pub category_counts: Vec<(Category, usize)>,
}

/// Runs the whole pipeline against the configured paths.
///
/// The input is read fully into memory once; extraction and description
/// building are two passes over the same text. The output file is replaced
/// atomically, so a failed run leaves any previous output intact.
pub fn run(cfg: &YthConfig) -> Result<RunSummary> {
    let text = read_input(&cfg.input_path)?;

    let handles = extract_handles(&text);
    tracing::debug!("extracted {} unique handles", handles.len());

    let descriptions = build_descriptions(&text);
    let grouped = GroupedHandles::build(&handles, &descriptions);

    storage::write_atomic(&cfg.output_path, &render(&grouped))?;

    let category_counts: Vec<(Category, usize)> = grouped
        .by_name()
        .into_iter()
        .map(|(cat, list)| (cat, list.len()))
        .collect();
    tracing::info!(
        "grouped {} handles into {}",
        grouped.len(),
        cfg.output_path.display()
    );

    Ok(RunSummary {
        unique_handles: grouped.len(),
        category_counts,
    })
}

/// Reads the input file, distinguishing access failures from encoding
/// failures.
fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| PipelineError::file_access(path, source))?;
    String::from_utf8(bytes).map_err(|err| PipelineError::Encoding {
        path: path.to_path_buf(),
        offset: err.utf8_error().valid_up_to(),
    })
}

/// Serializes the groups: one handle per line, categories in name order,
/// no headers or separators. Grouping is implicit in ordering only.
pub fn render(grouped: &GroupedHandles) -> String {
    let mut out = String::new();
    for (_, handles) in grouped.by_name() {
        for handle in handles {
            out.push_str(handle);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn render_emits_category_blocks_in_name_order() {
        let handles: HashSet<String> = ["@zcar", "@amusic"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let descriptions: HashMap<String, String> = [
            ("@zcar", "vintage car restorations"),
            ("@amusic", "piano tutorials"),
        ]
        .iter()
        .map(|(h, d)| (h.to_string(), d.to_string()))
        .collect();

        let grouped = GroupedHandles::build(&handles, &descriptions);
        // "cars" sorts before "music", so @zcar leads despite @amusic being
        // alphabetically first.
        assert_eq!(render(&grouped), "@zcar\n@amusic\n");
    }

    #[test]
    fn render_empty_groups_is_empty_string() {
        let grouped = GroupedHandles::build(&HashSet::new(), &HashMap::new());
        assert_eq!(render(&grouped), "");
    }

    #[test]
    fn read_input_missing_file_is_file_access() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::FileAccess { .. }));
    }

    #[test]
    fn read_input_invalid_utf8_is_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [b'@', b'a', 0xff, 0xfe]).unwrap();
        let err = read_input(&path).unwrap_err();
        match err {
            PipelineError::Encoding { offset, .. } => assert_eq!(offset, 2),
            other => panic!("expected Encoding, got {other:?}"),
        }
    }
}
