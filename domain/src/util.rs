//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values rather than bytes, so Hebrew and other
/// multi-byte text is cut on a character boundary. Returns the original
/// slice when it already fits.
pub fn truncate_chars(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => (&s[..end], true),
        None => (s, false),
    }
}

/// Collapse all runs of whitespace (including newlines) into single spaces.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_chars("hello world", 5), ("hello", true));
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_chars("hi", 10), ("hi", false));
    }

    #[test]
    fn truncate_exact_length_is_not_truncated() {
        assert_eq!(truncate_chars("abc", 3), ("abc", false));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        // Each Hebrew letter is 2 bytes in UTF-8
        let s = "בראשית";
        assert_eq!(truncate_chars(s, 3), ("ברא", true));
        assert_eq!(truncate_chars(s, 6), ("בראשית", false));
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_chars("", 10), ("", false));
    }

    #[test]
    fn single_line_collapses_newlines() {
        assert_eq!(single_line("a\n  b\r\nc"), "a b c");
        assert_eq!(single_line("  trimmed  "), "trimmed");
    }
}
