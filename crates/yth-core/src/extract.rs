//! Handle extraction: first pass over the input text.
//!
//! A handle is `@` followed by word characters or periods at the start of a
//! trimmed line. Only the leading run is captured; trailing text on the same
//! line is ignored here (the description pass reads it separately).

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Anchored to line start; `\w` keeps Unicode letters and digits.
const HANDLE_PATTERN: &str = r"^@[\w.]+";

static HANDLE_RE: OnceLock<Regex> = OnceLock::new();

fn handle_re() -> &'static Regex {
    HANDLE_RE.get_or_init(|| Regex::new(HANDLE_PATTERN).expect("handle pattern compiles"))
}

/// Returns the leading handle token of `line`, if the trimmed line starts
/// with one.
pub fn leading_handle(line: &str) -> Option<&str> {
    handle_re().find(line.trim()).map(|m| m.as_str())
}

/// Extracts the set of distinct handles from the input text.
///
/// Non-matching lines are ignored; empty input yields an empty set. Handles
/// are kept verbatim (case preserved) and compared by exact equality.
pub fn extract_handles(text: &str) -> HashSet<String> {
    text.lines()
        .filter_map(leading_handle)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_handle_basic() {
        assert_eq!(leading_handle("@alice"), Some("@alice"));
        assert_eq!(leading_handle("  @bob.smith_99  "), Some("@bob.smith_99"));
    }

    #[test]
    fn leading_handle_stops_at_disallowed_char() {
        assert_eq!(leading_handle("@alice plays piano"), Some("@alice"));
        assert_eq!(leading_handle("@alice,@bob"), Some("@alice"));
    }

    #[test]
    fn leading_handle_rejects_non_handle_lines() {
        assert_eq!(leading_handle("plain description text"), None);
        assert_eq!(leading_handle("email me at user@example.com"), None);
        assert_eq!(leading_handle("@"), None);
        assert_eq!(leading_handle(""), None);
    }

    #[test]
    fn extract_handles_dedups_and_preserves_case() {
        let text = "@Alice\nsome text\n@bob\n@Alice\n";
        let handles = extract_handles(text);
        assert_eq!(handles.len(), 2);
        assert!(handles.contains("@Alice"));
        assert!(handles.contains("@bob"));
        // Case matters for identity: @alice would be a third handle.
        assert!(!handles.contains("@alice"));
    }

    #[test]
    fn extract_handles_empty_input() {
        assert!(extract_handles("").is_empty());
        assert!(extract_handles("\n\nno handles here\n").is_empty());
    }
}
