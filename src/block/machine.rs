//! Per-line block transitions.

use tracing::trace;

use super::event::{BlockEvent, LineRole, ListKind};
use super::state::BlockState;
use super::Events;
use crate::inline::Transformed;
use crate::scan::{has_content, leading_run};

/// Everything one input line produces, in output order: the wrapper
/// events first, then the (possibly rewritten) line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutput {
    /// Wrapper tags to write before the line.
    pub events: Events,
    /// The line to write, if it had content.
    pub line: Option<String>,
    /// What the line turned into.
    pub role: LineRole,
}

impl LineOutput {
    /// Output of the end-of-input flush.
    pub fn flush(state: &mut BlockState) -> Self {
        let mut events = Events::new();
        state.flush(&mut events);
        Self {
            events,
            line: None,
            role: LineRole::Flush,
        }
    }

    /// Whether nothing would be written.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.line.is_none()
    }
}

/// `<li>` wrapping for a list line, markers removed and text trimmed.
fn list_item(line: &str, marker_len: usize) -> String {
    format!("<li>{}</li>\n", line[marker_len..].trim())
}

/// Advance the block state by one inline-transformed line.
///
/// Transitions, in order:
/// 1. A line starting with `-` opens `<ul>` if needed and becomes an item;
///    any other line closes an open `<ul>`.
/// 2. The same for `*` and `<ol>`.
/// 3. Outside headings and lists, text opens `<p>` or continues it with
///    `<br/>`; a blank line closes it.
/// 4. Lines with content are written after the tags.
pub fn step(state: &mut BlockState, transformed: Transformed) -> LineOutput {
    let Transformed { line, heading } = transformed;
    let content = has_content(&line);

    let mut events = Events::new();
    let mut item = None;

    for kind in ListKind::ALL {
        let marker_len = leading_run(line.as_bytes(), kind.marker());
        if marker_len > 0 {
            state.open_list(kind, &mut events);
            item = Some((kind, list_item(&line, marker_len)));
        } else {
            state.close_list(kind, &mut events);
        }
    }

    if heading.is_none() && !state.in_list() {
        match (state.paragraph_open, content) {
            (false, true) => state.open_paragraph(&mut events),
            (true, true) => events.push(BlockEvent::LineBreak),
            (true, false) => state.close_paragraph(&mut events),
            (false, false) => {}
        }
    }

    let role = match (&item, heading) {
        (Some((kind, _)), _) => LineRole::ListItem(*kind),
        (None, Some(level)) => LineRole::Heading(level),
        (None, None) if content => LineRole::Text,
        (None, None) => LineRole::Blank,
    };
    trace!(?role, events = events.len(), "line");

    let line = if content {
        Some(item.map_or(line, |(_, html)| html))
    } else {
        None
    };

    LineOutput { events, line, role }
}
