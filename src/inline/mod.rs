//! Inline transforms for a single line.
//!
//! Four passes run in a fixed order, each over the output of the previous:
//! 1. Style: first `**` pair to `<b>`, first `__` pair to `<em>`
//! 2. Digest: first `[[text]]` to the MD5 hex digest of `text`
//! 3. Strip: first `((text))` to `text` without `c`/`C`
//! 4. Heading: `#`..`######` prefix to `<h1>`..`<h6>`
//!
//! Order matters: later passes see the rewrites of earlier ones, so
//! `[[**a**]]` hashes `<b>a</b>`. No pass ever fails; a missing or
//! unterminated pattern leaves the line as it was.

mod directive;
mod heading;
mod style;

pub use directive::{apply_digest, apply_strip, DIGEST_CLOSE, DIGEST_OPEN, STRIP_CLOSE, STRIP_OPEN};
pub use heading::{apply_heading, MAX_HEADING_LEVEL};
pub use style::{apply_style, Style};

use crate::Options;

/// A line after all inline passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// The rewritten line, terminator included.
    pub line: String,
    /// Heading level (1-6) when the heading pass fired.
    pub heading: Option<u8>,
}

impl Transformed {
    /// Whether the heading pass rewrote this line.
    #[inline]
    pub fn is_heading(&self) -> bool {
        self.heading.is_some()
    }
}

/// Run every enabled inline pass over `line`.
///
/// # Example
/// ```
/// use markline::{transform_line, Options};
///
/// let t = transform_line("## **Bold** title\n", &Options::default());
/// assert_eq!(t.line, "<h2><b>Bold</b> title</h2>\n");
/// assert_eq!(t.heading, Some(2));
/// ```
pub fn transform_line(line: &str, options: &Options) -> Transformed {
    let mut current = line.to_owned();

    if options.emphasis {
        current = apply_style(&current);
    }
    if options.digest_directive {
        current = apply_digest(&current);
    }
    if options.strip_directive {
        current = apply_strip(&current);
    }

    let mut heading = None;
    if options.headings {
        if let Some((level, converted)) = apply_heading(&current) {
            heading = Some(level);
            current = converted;
        }
    }

    Transformed {
        line: current,
        heading,
    }
}
