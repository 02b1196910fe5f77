//! Bracketed inline directives.
//!
//! `[[text]]` becomes the lowercase MD5 hex digest of `text`'s UTF-8 bytes.
//! `((text))` becomes `text` with every `c` and `C` removed. Only the first
//! span of each kind on a line is rewritten; identical later spans stay.

use crate::scan::find_delimited;

/// Opening delimiter of the digest directive.
pub const DIGEST_OPEN: &str = "[[";
/// Closing delimiter of the digest directive.
pub const DIGEST_CLOSE: &str = "]]";
/// Opening delimiter of the strip directive.
pub const STRIP_OPEN: &str = "((";
/// Closing delimiter of the strip directive.
pub const STRIP_CLOSE: &str = "))";

/// Replace the first `[[text]]` span with the MD5 digest of `text`.
///
/// # Example
/// ```
/// use markline::inline::apply_digest;
///
/// assert_eq!(apply_digest("[[hello]]\n"), "5d41402abc4b2a76b9719d911017c592\n");
/// ```
pub fn apply_digest(line: &str) -> String {
    match find_delimited(line, DIGEST_OPEN, DIGEST_CLOSE) {
        Some(span) => {
            let digest = md5::compute(span.inner.slice(line).as_bytes());
            span.replace(line, &format!("{digest:x}"))
        }
        None => line.to_owned(),
    }
}

/// Replace the first `((text))` span with `text` minus `c`/`C`.
pub fn apply_strip(line: &str) -> String {
    match find_delimited(line, STRIP_OPEN, STRIP_CLOSE) {
        Some(span) => {
            let stripped: String = span
                .inner
                .slice(line)
                .chars()
                .filter(|ch| !matches!(ch, 'c' | 'C'))
                .collect();
            span.replace(line, &stripped)
        }
        None => line.to_owned(),
    }
}
