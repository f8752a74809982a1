//! Export filename sanitizer.

use crate::DEFAULT_FILE_STEM;

/// Characters that are never allowed in an exported filename.
pub const FORBIDDEN_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Turns a billed-to name into a safe file stem.
///
/// ## Steps
/// 1. Trim surrounding whitespace
/// 2. Strip `\ / : * ? " < > |`
/// 3. Replace each whitespace run with a single `-`, including runs left at
///    either end by step 2
/// 4. Lower-case
/// 5. Drop trailing dots (not a valid filename ending everywhere)
///
/// Falls back to `"receipt"` when nothing is left.
///
/// ## Example
/// ```rust
/// use milkbill_core::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My Name / Co."), "my-name-co");
/// assert_eq!(sanitize_filename("  Asha   Devi "), "asha-devi");
/// assert_eq!(sanitize_filename("Asha /"), "asha-");
/// assert_eq!(sanitize_filename("???"), "receipt");
/// ```
pub fn sanitize_filename(raw: &str) -> String {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .collect();

    let stem = hyphenate_whitespace(&stripped).to_lowercase();
    let stem = stem.trim_end_matches('.');

    if stem.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// Replaces every run of whitespace with one `-`.
fn hyphenate_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('-');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_forbidden_characters() {
        assert_eq!(sanitize_filename(r#"a\b/c:d*e?f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn test_slash_between_words() {
        assert_eq!(sanitize_filename("My Name / Co."), "my-name-co");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(sanitize_filename("Asha \t\n Devi"), "asha-devi");
    }

    #[test]
    fn test_separator_at_either_end_leaves_hyphen() {
        assert_eq!(sanitize_filename("Asha /"), "asha-");
        assert_eq!(sanitize_filename("/ Asha"), "-asha");
        assert_eq!(sanitize_filename("| Asha Devi :"), "-asha-devi-");
    }

    #[test]
    fn test_inner_dots_kept() {
        assert_eq!(sanitize_filename("R.K. Dairy"), "r.k.-dairy");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(sanitize_filename(""), "receipt");
        assert_eq!(sanitize_filename("   "), "receipt");
        assert_eq!(sanitize_filename("<>|"), "receipt");
        assert_eq!(sanitize_filename("..."), "receipt");
    }
}
