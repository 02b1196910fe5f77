//! markline: line-oriented Markdown to HTML converter
//!
//! Converts a small, README-flavoured subset of Markdown into HTML one line
//! at a time. Every line passes through two stages:
//!
//! 1. Inline transforms: bold/emphasis, the `[[...]]` MD5 directive, the
//!    `((...))` letter-strip directive, then heading conversion.
//! 2. Block state machine: opens and closes `<ul>`, `<ol>` and `<p>` wrappers
//!    as the line stream moves between list items and paragraph text.
//!
//! # Design Principles
//! - Streaming: one line in flight, three boolean flags of state
//! - No regex: delimiter search is byte-level (`memchr`/`memmem`)
//! - First match only: every inline pass rewrites at most one span
//! - Malformed syntax is literal text, never an error

pub mod block;
pub mod driver;
pub mod error;
pub mod inline;
pub mod range;
pub mod render;
pub mod scan;

// Re-export primary types
pub use block::{BlockEvent, BlockState, LineOutput, LineRole, ListKind};
pub use driver::{convert, convert_file, convert_str, Converter, Document, Summary};
pub use error::Error;
pub use inline::{transform_line, Transformed};
pub use range::{Delimited, Range};
pub use render::HtmlWriter;

/// Conversion options.
///
/// Every inline pass can be switched off individually. Block handling
/// (lists and paragraphs) is always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Convert the first `**` pair to `<b>` and the first `__` pair to `<em>`.
    pub emphasis: bool,
    /// Replace the first `[[text]]` span with the MD5 hex digest of `text`.
    pub digest_directive: bool,
    /// Replace the first `((text))` span with `text` minus every `c`/`C`.
    pub strip_directive: bool,
    /// Convert `#`..`######` lines to `<h1>`..`<h6>`.
    pub headings: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            emphasis: true,
            digest_directive: true,
            strip_directive: true,
            headings: true,
        }
    }
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = markline::to_html("# Hello\nWorld\n");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>\nWorld\n</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut document = Document::new(*options);

    for line in input.split_inclusive('\n') {
        writer.write_output(&document.push_line(line));
    }
    writer.write_output(&document.finish());

    writer.into_string()
}
