//! Open/close flags carried across the whole document.

use tracing::debug;

use super::event::{BlockEvent, ListKind};
use super::Events;

/// Which wrappers are currently open.
///
/// Starts all-closed for every document. Lists are checked before
/// paragraphs on every line, so paragraph logic never runs while a list is
/// open and a `<p>` is never emitted inside a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockState {
    pub unordered_open: bool,
    pub ordered_open: bool,
    pub paragraph_open: bool,
}

impl BlockState {
    /// Fresh, all-closed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a list of `kind` is open.
    #[inline]
    pub fn is_list_open(&self, kind: ListKind) -> bool {
        match kind {
            ListKind::Unordered => self.unordered_open,
            ListKind::Ordered => self.ordered_open,
        }
    }

    /// Whether any list is open.
    #[inline]
    pub fn in_list(&self) -> bool {
        self.unordered_open || self.ordered_open
    }

    fn list_flag(&mut self, kind: ListKind) -> &mut bool {
        match kind {
            ListKind::Unordered => &mut self.unordered_open,
            ListKind::Ordered => &mut self.ordered_open,
        }
    }

    /// Open a list of `kind` unless it already is.
    pub fn open_list(&mut self, kind: ListKind, events: &mut Events) {
        let flag = self.list_flag(kind);
        if !*flag {
            *flag = true;
            debug!(list = kind.tag(), "open list");
            events.push(BlockEvent::ListStart(kind));
        }
    }

    /// Close a list of `kind` if it is open.
    pub fn close_list(&mut self, kind: ListKind, events: &mut Events) {
        let flag = self.list_flag(kind);
        if *flag {
            *flag = false;
            debug!(list = kind.tag(), "close list");
            events.push(BlockEvent::ListEnd(kind));
        }
    }

    /// Open a paragraph.
    pub fn open_paragraph(&mut self, events: &mut Events) {
        debug_assert!(!self.in_list());
        self.paragraph_open = true;
        debug!("open paragraph");
        events.push(BlockEvent::ParagraphStart);
    }

    /// Close the paragraph if one is open.
    pub fn close_paragraph(&mut self, events: &mut Events) {
        if self.paragraph_open {
            self.paragraph_open = false;
            debug!("close paragraph");
            events.push(BlockEvent::ParagraphEnd);
        }
    }

    /// Close everything still open: unordered list, ordered list, paragraph.
    pub fn flush(&mut self, events: &mut Events) {
        for kind in ListKind::ALL {
            self.close_list(kind, events);
        }
        self.close_paragraph(events);
    }

    /// Whether every wrapper is closed.
    pub fn is_closed(&self) -> bool {
        !self.in_list() && !self.paragraph_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_closed() {
        let state = BlockState::new();
        assert!(state.is_closed());
        assert!(!state.in_list());
    }

    #[test]
    fn test_open_list_once() {
        let mut state = BlockState::new();
        let mut events = Events::new();
        state.open_list(ListKind::Unordered, &mut events);
        state.open_list(ListKind::Unordered, &mut events);
        assert_eq!(events.as_slice(), &[BlockEvent::ListStart(ListKind::Unordered)]);
        assert!(state.is_list_open(ListKind::Unordered));
        assert!(!state.is_list_open(ListKind::Ordered));
    }

    #[test]
    fn test_close_unopened_is_silent() {
        let mut state = BlockState::new();
        let mut events = Events::new();
        state.close_list(ListKind::Ordered, &mut events);
        state.close_paragraph(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_flush_order() {
        let mut state = BlockState {
            unordered_open: true,
            ordered_open: true,
            paragraph_open: true,
        };
        let mut events = Events::new();
        state.flush(&mut events);
        assert_eq!(
            events.as_slice(),
            &[
                BlockEvent::ListEnd(ListKind::Unordered),
                BlockEvent::ListEnd(ListKind::Ordered),
                BlockEvent::ParagraphEnd,
            ]
        );
        assert!(state.is_closed());
    }

    #[test]
    fn test_flush_closed_state() {
        let mut state = BlockState::new();
        let mut events = Events::new();
        state.flush(&mut events);
        assert!(events.is_empty());
    }
}
