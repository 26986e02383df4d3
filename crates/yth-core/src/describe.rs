//! Description building: second pass over the input text.
//!
//! Each handle line is paired with the trimmed line that follows it, unless
//! that line starts with `@` (the next handle record) or the file ends, in
//! which case the description is empty.

use std::collections::HashMap;

use crate::extract::leading_handle;

/// Maps each handle to its description.
///
/// If the same handle appears on multiple lines, the LAST occurrence wins.
/// Classification of repeated handles depends on this overwrite behavior.
pub fn build_descriptions(text: &str) -> HashMap<String, String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut descriptions = HashMap::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(handle) = leading_handle(line) else {
            continue;
        };
        let desc = match lines.get(i + 1) {
            Some(next) => {
                let next = next.trim();
                // Bare '@' check, not the full handle pattern.
                if next.starts_with('@') {
                    ""
                } else {
                    next
                }
            }
            None => "",
        };
        descriptions.insert(handle.to_string(), desc.to_string());
    }

    descriptions
}
