//! Output file lifecycle.
//!
//! Writes to a `.part` temp path beside the destination, then renames into
//! place. A failed run therefore never truncates a previous run's output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: the final path with `.part` appended
/// (e.g. `handles_output.txt` becomes `handles_output.txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut os = final_path.as_os_str().to_owned();
    os.push(TEMP_SUFFIX);
    PathBuf::from(os)
}

/// Replaces `final_path` with `contents` atomically.
///
/// Errors are [`PipelineError::FileAccess`]; on failure the temp file is
/// removed and any existing output at `final_path` is left untouched.
pub fn write_atomic(final_path: &Path, contents: &str) -> Result<()> {
    let tmp = temp_path(final_path);

    fs::write(&tmp, contents).map_err(|source| PipelineError::file_access(&tmp, source))?;

    fs::rename(&tmp, final_path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        PipelineError::file_access(final_path, source)
    })?;

    tracing::debug!("wrote {} bytes to {}", contents.len(), final_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("handles_output.txt"));
        assert_eq!(p.to_string_lossy(), "handles_output.txt.part");
        let p2 = temp_path(Path::new("/tmp/out/list.txt"));
        assert_eq!(p2.to_string_lossy(), "/tmp/out/list.txt.part");
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        write_atomic(&out, "@alice\n@bob\n").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "@alice\n@bob\n");
        assert!(!temp_path(&out).exists());
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        write_atomic(&out, "@old\n").unwrap();
        write_atomic(&out, "@new\n").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "@new\n");
    }

    #[test]
    fn missing_parent_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("does/not/exist/out.txt");
        let err = write_atomic(&out, "@alice\n").unwrap_err();
        assert!(matches!(err, PipelineError::FileAccess { .. }));
    }

    #[test]
    fn failed_write_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        write_atomic(&out, "@kept\n").unwrap();

        // Turn the temp path into a directory so the next write fails.
        fs::create_dir(temp_path(&out)).unwrap();
        assert!(write_atomic(&out, "@clobbered\n").is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "@kept\n");
    }
}
