//! Document driver: feeds lines through the inline and block stages.
//!
//! [`Document`] owns the block state for one document. [`Converter`] pulls
//! lines from a reader lazily, one at a time, and yields what each line
//! produced. [`convert`] and [`convert_file`] write that output as they go.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::block::{self, BlockState, LineOutput, LineRole};
use crate::error::Error;
use crate::inline::transform_line;
use crate::render::HtmlWriter;
use crate::Options;

/// Block state and options for one document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    options: Options,
    state: BlockState,
}

impl Document {
    /// Start a document with every wrapper closed.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            state: BlockState::new(),
        }
    }

    /// Process one line, terminator included.
    pub fn push_line(&mut self, line: &str) -> LineOutput {
        let transformed = transform_line(line, &self.options);
        block::step(&mut self.state, transformed)
    }

    /// Close every wrapper still open.
    pub fn finish(&mut self) -> LineOutput {
        LineOutput::flush(&mut self.state)
    }

    /// Current block state.
    pub fn state(&self) -> BlockState {
        self.state
    }
}

/// Lazy line-by-line conversion of a reader.
///
/// Yields one [`LineOutput`] per source line, then one final output with
/// the closing tags if anything was still open. A read error is yielded
/// once and ends the sequence.
pub struct Converter<R> {
    reader: R,
    document: Document,
    buf: String,
    done: bool,
}

impl<R: BufRead> Converter<R> {
    /// Create a converter over `reader`.
    pub fn new(reader: R, options: Options) -> Self {
        Self {
            reader,
            document: Document::new(options),
            buf: String::with_capacity(256),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Converter<R> {
    type Item = Result<LineOutput, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                let flush = self.document.finish();
                (!flush.is_empty()).then_some(Ok(flush))
            }
            Ok(_) => Some(Ok(self.document.push_line(&self.buf))),
            Err(err) => {
                self.done = true;
                Some(Err(Error::Read(err)))
            }
        }
    }
}

/// Counts gathered during one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub lines_read: usize,
    pub headings: usize,
    pub list_items: usize,
    pub paragraphs: usize,
    pub bytes_written: usize,
}

impl Summary {
    fn record(&mut self, output: &LineOutput) {
        match output.role {
            LineRole::Heading(_) => self.headings += 1,
            LineRole::ListItem(_) => self.list_items += 1,
            LineRole::Text | LineRole::Blank | LineRole::Flush => {}
        }
        if output.role != LineRole::Flush {
            self.lines_read += 1;
        }
        self.paragraphs += output
            .events
            .iter()
            .filter(|&&event| event == block::BlockEvent::ParagraphStart)
            .count();
    }
}

/// Convert everything `reader` yields, writing HTML to `writer` line by line.
///
/// The writer is flushed before returning.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &Options,
) -> Result<Summary, Error> {
    let mut html = HtmlWriter::new();
    let mut summary = Summary::default();

    for output in Converter::new(reader, *options) {
        let output = output?;
        summary.record(&output);
        html.write_output(&output);
        summary.bytes_written += html.len();
        html.drain_into(&mut writer).map_err(Error::Write)?;
    }
    writer.flush().map_err(Error::Write)?;

    Ok(summary)
}

/// Convert the file at `source` into a new or truncated file at `dest`.
///
/// The source is opened first, so a missing source never touches `dest`.
#[instrument(skip_all, fields(source = %source.display(), dest = %dest.display()))]
pub fn convert_file(source: &Path, dest: &Path, options: &Options) -> Result<Summary, Error> {
    let input = File::open(source).map_err(|source_err| Error::SourceUnreadable {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let output = File::create(dest).map_err(|dest_err| Error::DestinationUnwritable {
        path: dest.to_path_buf(),
        source: dest_err,
    })?;

    let summary = convert(BufReader::new(input), BufWriter::new(output), options)?;
    info!(
        lines = summary.lines_read,
        headings = summary.headings,
        list_items = summary.list_items,
        paragraphs = summary.paragraphs,
        bytes = summary.bytes_written,
        "converted"
    );
    Ok(summary)
}

/// Convert an in-memory document through the streaming path.
pub fn convert_str(input: &str, options: &Options) -> Result<String, Error> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 4);
    convert(input.as_bytes(), &mut out, options)?;
    String::from_utf8(out)
        .map_err(|err| Error::Write(io::Error::new(io::ErrorKind::InvalidData, err)))
}
