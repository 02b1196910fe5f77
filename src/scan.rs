//! Byte-level scanning helpers shared by the inline and block stages.
//!
//! Every search here is "first match, leftmost". Nothing scans past the
//! line terminator.

use memchr::memmem;

use crate::range::{Delimited, Range};

/// Split a line into its content and its terminator (`\n`, `\r\n` or empty).
///
/// # Example
/// ```
/// use markline::scan::split_terminator;
///
/// assert_eq!(split_terminator("text\r\n"), ("text", "\r\n"));
/// assert_eq!(split_terminator("text"), ("text", ""));
/// ```
#[inline]
pub fn split_terminator(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let cut = match bytes {
        [.., b'\r', b'\n'] => bytes.len() - 2,
        [.., b'\n'] => bytes.len() - 1,
        _ => bytes.len(),
    };
    line.split_at(cut)
}

/// Whether a line carries anything besides its terminator.
#[inline]
pub fn has_content(line: &str) -> bool {
    !split_terminator(line).0.is_empty()
}

/// Number of leading `marker` bytes.
#[inline]
pub fn leading_run(line: &[u8], marker: u8) -> usize {
    line.iter().take_while(|&&b| b == marker).count()
}

/// Replace the first occurrence of `needle` with `replacement`.
///
/// Returns `None` when `needle` does not occur.
pub fn replace_first(line: &str, needle: &str, replacement: &str) -> Option<String> {
    let pos = memmem::find(line.as_bytes(), needle.as_bytes())?;

    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..pos]);
    out.push_str(replacement);
    out.push_str(&line[pos + needle.len()..]);
    Some(out)
}

/// Find the first `open`..`close` span enclosing at least one byte.
///
/// The opener is the leftmost `open` in the line content; the closer is the
/// nearest `close` after at least one enclosed byte. If the leftmost opener
/// has no closer, no later opener can have one either.
///
/// # Example
/// ```
/// use markline::scan::find_delimited;
///
/// let line = "see [[a]] and [[b]]\n";
/// let span = find_delimited(line, "[[", "]]").unwrap();
/// assert_eq!(span.inner.slice(line), "a");
/// assert_eq!(span.outer.slice(line), "[[a]]");
/// ```
pub fn find_delimited(line: &str, open: &str, close: &str) -> Option<Delimited> {
    let (content, _) = split_terminator(line);
    let bytes = content.as_bytes();

    let start = memmem::find(bytes, open.as_bytes())?;
    let inner_start = start + open.len();
    // The enclosed text is never empty.
    let search_from = inner_start + 1;
    if search_from > bytes.len() {
        return None;
    }
    let inner_end = search_from + memmem::find(&bytes[search_from..], close.as_bytes())?;

    Some(Delimited {
        outer: Range::from_usize(start, inner_end + close.len()),
        inner: Range::from_usize(inner_start, inner_end),
    })
}
