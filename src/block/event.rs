//! Block-level event types.

/// Type of list.
///
/// Ordered lists are introduced by `*`, not by numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Lines starting with one or more `-`.
    Unordered,
    /// Lines starting with one or more `*`.
    Ordered,
}

impl ListKind {
    /// Both kinds, in the order the state machine checks them.
    pub const ALL: [ListKind; 2] = [ListKind::Unordered, ListKind::Ordered];

    /// The marker byte that introduces an item of this kind.
    pub fn marker(self) -> u8 {
        match self {
            Self::Unordered => b'-',
            Self::Ordered => b'*',
        }
    }

    /// HTML tag name of the wrapper element.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Wrapper tags emitted by the block state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a list.
    ListStart(ListKind),
    /// End of a list.
    ListEnd(ListKind),
    /// Start of a paragraph.
    ParagraphStart,
    /// Line break between two text lines of one paragraph.
    LineBreak,
    /// End of a paragraph.
    ParagraphEnd,
}

/// What a single input line turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// A heading of the given level.
    Heading(u8),
    /// A list item of the given kind.
    ListItem(ListKind),
    /// Text flowing through paragraph logic.
    Text,
    /// A line with nothing but a terminator.
    Blank,
    /// End-of-input flush; carries no line.
    Flush,
}
