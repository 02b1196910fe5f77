//! HTML output writer.
//!
//! Tags and lines are appended to a reusable buffer. Streaming callers
//! drain the buffer into an `io::Write` after every line; in-memory callers
//! take the whole buffer at the end.

use std::io;

use crate::block::{BlockEvent, LineOutput, ListKind};

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use markline::{HtmlWriter, ListKind};
///
/// let mut writer = HtmlWriter::new();
/// writer.list_start(ListKind::Unordered);
/// writer.write_line("<li>item</li>\n");
/// writer.list_end(ListKind::Unordered);
///
/// assert_eq!(writer.into_string(), "<ul>\n<li>item</li>\n</ul>\n");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Output is the input plus a handful of short tags; a quarter extra
    /// covers typical README files.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a converted line verbatim.
    #[inline]
    pub fn write_line(&mut self, line: &str) {
        self.out.extend_from_slice(line.as_bytes());
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only `str` data and ASCII tags are ever written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only `str` data and ASCII tags are ever written
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Move everything written so far into `sink`, keeping capacity.
    pub fn drain_into<W: io::Write>(&mut self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.out)?;
        self.out.clear();
        Ok(())
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag with newline: `<tagname>\n`
    #[inline]
    pub fn open_tag_nl(&mut self, tag: &'static str) {
        self.out.push(b'<');
        self.write_str(tag);
        self.out.push(b'>');
        self.newline();
    }

    /// Write closing tag with newline: `</tagname>\n`
    #[inline]
    pub fn close_tag_nl(&mut self, tag: &'static str) {
        self.write_str("</");
        self.write_str(tag);
        self.out.push(b'>');
        self.newline();
    }

    // --- Block Elements ---

    /// Write list start: `<ul>\n` or `<ol>\n`
    #[inline]
    pub fn list_start(&mut self, kind: ListKind) {
        self.open_tag_nl(kind.tag());
    }

    /// Write list end: `</ul>\n` or `</ol>\n`
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        self.close_tag_nl(kind.tag());
    }

    /// Write paragraph start: `<p>\n`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>\n");
    }

    /// Write paragraph end: `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>\n");
    }

    /// Write line break: `<br/>\n`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str("<br/>\n");
    }

    /// Write the tag for one block event.
    pub fn block_event(&mut self, event: BlockEvent) {
        match event {
            BlockEvent::ListStart(kind) => self.list_start(kind),
            BlockEvent::ListEnd(kind) => self.list_end(kind),
            BlockEvent::ParagraphStart => self.paragraph_start(),
            BlockEvent::LineBreak => self.line_break(),
            BlockEvent::ParagraphEnd => self.paragraph_end(),
        }
    }

    /// Write one line's events followed by the line itself.
    pub fn write_output(&mut self, output: &LineOutput) {
        for &event in &output.events {
            self.block_event(event);
        }
        if let Some(line) = &output.line {
            self.write_line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Events, LineRole};

    #[test]
    fn test_block_events() {
        let mut w = HtmlWriter::new();
        for event in [
            BlockEvent::ListStart(ListKind::Ordered),
            BlockEvent::ListEnd(ListKind::Ordered),
            BlockEvent::ParagraphStart,
            BlockEvent::LineBreak,
            BlockEvent::ParagraphEnd,
        ] {
            w.block_event(event);
        }
        assert_eq!(w.as_str(), "<ol>\n</ol>\n<p>\n<br/>\n</p>\n");
    }

    #[test]
    fn test_write_output_events_before_line() {
        let mut events = Events::new();
        events.push(BlockEvent::ListEnd(ListKind::Unordered));
        events.push(BlockEvent::ParagraphStart);
        let output = LineOutput {
            events,
            line: Some("text\n".to_string()),
            role: LineRole::Text,
        };

        let mut w = HtmlWriter::new();
        w.write_output(&output);
        assert_eq!(w.as_str(), "</ul>\n<p>\ntext\n");
    }

    #[test]
    fn test_drain_into() {
        let mut w = HtmlWriter::new();
        w.paragraph_start();
        let mut sink = Vec::new();
        w.drain_into(&mut sink).unwrap();
        assert!(w.is_empty());
        assert_eq!(sink, b"<p>\n");

        w.paragraph_end();
        w.drain_into(&mut sink).unwrap();
        assert_eq!(sink, b"<p>\n</p>\n");
    }

    #[test]
    fn test_len() {
        let mut w = HtmlWriter::with_capacity_for(100);
        assert_eq!(w.len(), 0);
        w.write_line("abc");
        w.newline();
        assert_eq!(w.len(), 4);
    }
}
