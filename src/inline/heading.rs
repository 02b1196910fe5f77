//! Heading conversion.

use crate::scan::{leading_run, split_terminator};

/// Deepest heading level.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Convert a `#`..`######` line to `<hN>...</hN>\n`.
///
/// The run of `#` must be followed by a whitespace character, and the line
/// terminator counts: `#\n` is an empty `<h1>`. That character is consumed;
/// everything after it up to the terminator is the heading text. Returns the
/// level alongside the rewritten line.
///
/// # Example
/// ```
/// use markline::inline::apply_heading;
///
/// assert_eq!(apply_heading("### Title\n"), Some((3, "<h3>Title</h3>\n".to_string())));
/// assert_eq!(apply_heading("##\n"), Some((2, "<h2></h2>\n".to_string())));
/// assert_eq!(apply_heading("####### Title\n"), None);
/// ```
pub fn apply_heading(line: &str) -> Option<(u8, String)> {
    let level = leading_run(line.as_bytes(), b'#');
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    let separator = line[level..].chars().next().filter(|ch| ch.is_whitespace())?;

    let (content, _) = split_terminator(line);
    // The separator may be the terminator itself, leaving no text.
    let text = content.get(level + separator.len_utf8()..).unwrap_or_default();
    Some((level as u8, format!("<h{level}>{text}</h{level}>\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_levels() {
        for level in 1..=MAX_HEADING_LEVEL {
            let line = format!("{} Title\n", "#".repeat(level));
            let (got, html) = apply_heading(&line).unwrap();
            assert_eq!(got as usize, level);
            assert_eq!(html, format!("<h{level}>Title</h{level}>\n"));
        }
    }

    #[test]
    fn test_seven_hashes() {
        assert_eq!(apply_heading("####### Title\n"), None);
    }

    #[test]
    fn test_requires_whitespace() {
        assert_eq!(apply_heading("#Title\n"), None);
        assert_eq!(apply_heading("##x\n"), None);
        assert_eq!(apply_heading("#"), None);
    }

    #[test]
    fn test_terminator_is_separator() {
        assert_eq!(apply_heading("#\n"), Some((1, "<h1></h1>\n".to_string())));
        assert_eq!(apply_heading("##\n"), Some((2, "<h2></h2>\n".to_string())));
        assert_eq!(apply_heading("###\r\n"), Some((3, "<h3></h3>\n".to_string())));
        assert_eq!(apply_heading("#######\n"), None);
    }

    #[test]
    fn test_not_at_line_start() {
        assert_eq!(apply_heading(" # Title\n"), None);
        assert_eq!(apply_heading("Title # x\n"), None);
    }

    #[test]
    fn test_other_whitespace_separators() {
        assert_eq!(apply_heading("##\tTitle\n"), Some((2, "<h2>Title</h2>\n".to_string())));
        assert_eq!(apply_heading("#\u{a0}Title\n"), Some((1, "<h1>Title</h1>\n".to_string())));
    }

    #[test]
    fn test_keeps_extra_spaces() {
        assert_eq!(apply_heading("#  Title \n"), Some((1, "<h1> Title </h1>\n".to_string())));
    }

    #[test]
    fn test_crlf_and_missing_terminator() {
        assert_eq!(apply_heading("# A\r\n"), Some((1, "<h1>A</h1>\n".to_string())));
        assert_eq!(apply_heading("# A"), Some((1, "<h1>A</h1>\n".to_string())));
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(apply_heading("# \n"), Some((1, "<h1></h1>\n".to_string())));
    }
}
