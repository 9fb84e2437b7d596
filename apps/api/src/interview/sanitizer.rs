//! Text sanitizing: bounds free text before it is placed in a prompt.

use once_cell::sync::Lazy;
use regex::Regex;

/// Appended whenever text is cut.
pub const TRUNCATION_MARKER: &str = "\n[Content truncated for processing]";

pub const RESUME_CHAR_CAP: usize = 3000;
pub const JOB_DESCRIPTION_CHAR_CAP: usize = 2000;
pub const TRANSCRIPT_CHAR_CAP: usize = 6000;

static WIDE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{3,}").expect("valid space-run regex"));
static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("valid blank-line regex"));

/// Keeps at most `max_chars` characters, appending [`TRUNCATION_MARKER`] when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split mid-character.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Collapses the whitespace runs that PDF text extraction leaves behind.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = WIDE_SPACES.replace_all(&text, " ");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(truncate("", 10), "");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 100), "hello");
    }

    #[test]
    fn test_long_text_cut_with_marker() {
        let out = truncate("abcdefghij", 4);
        assert_eq!(out, format!("abcd{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_zero_cap_keeps_only_marker() {
        assert_eq!(truncate("abc", 0), TRUNCATION_MARKER);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let out = truncate("résumé text", 6);
        assert_eq!(out, format!("résumé{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_prefix_length_holds_for_many_caps() {
        let text = "x".repeat(50);
        for n in 0..60 {
            let out = truncate(&text, n);
            if n >= 50 {
                assert_eq!(out, text);
            } else {
                assert_eq!(out.chars().count(), n + TRUNCATION_MARKER.chars().count());
                assert!(out.ends_with(TRUNCATION_MARKER));
            }
        }
    }

    #[test]
    fn test_normalize_whitespace_collapses_pdf_gaps() {
        let raw = "Jane Doe      Engineer\r\n\r\n\n\n\nSkills:   Rust\n";
        assert_eq!(normalize_whitespace(raw), "Jane Doe Engineer\n\nSkills: Rust");
    }
}
