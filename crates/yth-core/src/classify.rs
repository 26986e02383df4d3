//! Classification and per-category grouping.
//!
//! Assigns each handle to exactly one category by testing its description
//! against the keyword table in precedence order, then groups handles per
//! category with case-insensitive ordering.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::category::Category;

/// Assigns a category to one description. Pure and order-sensitive: the
/// first category in [`Category::PRECEDENCE`] with a keyword match wins,
/// else `Other`.
pub fn classify_description(description: &str) -> Category {
    let lower = description.to_lowercase();
    Category::PRECEDENCE
        .into_iter()
        .find(|cat| cat.matches(&lower))
        .unwrap_or(Category::Other)
}

/// Handles grouped by category.
///
/// Every category is present (possibly empty) so output ordering stays
/// deterministic regardless of which categories received matches. Within a
/// category, handles are deduplicated and sorted case-insensitively, ties
/// broken by byte order.
#[derive(Debug)]
pub struct GroupedHandles {
    groups: BTreeMap<Category, Vec<String>>,
}

impl GroupedHandles {
    /// Classifies every handle using its description (empty if absent) and
    /// builds the per-category lists.
    pub fn build(handles: &HashSet<String>, descriptions: &HashMap<String, String>) -> Self {
        let mut groups: BTreeMap<Category, Vec<String>> =
            Category::ALL.into_iter().map(|cat| (cat, Vec::new())).collect();

        for handle in handles {
            let desc = descriptions.get(handle).map(String::as_str).unwrap_or("");
            let cat = classify_description(desc);
            groups.entry(cat).or_default().push(handle.clone());
        }

        for list in groups.values_mut() {
            list.sort_by(case_insensitive_then_bytes);
            // Safeguard against reprocessing the same collection; the
            // handle set already guarantees uniqueness.
            list.dedup();
        }

        Self { groups }
    }

    /// Handles assigned to one category, in final output order.
    pub fn handles_in(&self, cat: Category) -> &[String] {
        self.groups.get(&cat).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All groups in ascending lexicographic order of category NAME (the
    /// writer's order), not classifier precedence.
    pub fn by_name(&self) -> Vec<(Category, &[String])> {
        let mut out: Vec<(Category, &[String])> = self
            .groups
            .iter()
            .map(|(&cat, handles)| (cat, handles.as_slice()))
            .collect();
        out.sort_by_key(|(cat, _)| cat.name());
        out
    }

    /// Total number of grouped handles.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn case_insensitive_then_bytes(a: &String, b: &String) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
