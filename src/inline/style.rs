//! Bold and emphasis markers.
//!
//! Only the first two occurrences of each delimiter are rewritten, whether
//! or not they are adjacent: `**a**b**c**` becomes `<b>a</b>b**c**`. A lone
//! delimiter still becomes an opening tag.

use crate::scan::replace_first;

/// Delimited text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `**text**` to `<b>text</b>`.
    Bold,
    /// `__text__` to `<em>text</em>`.
    Emphasis,
}

impl Style {
    /// The Markdown delimiter.
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Emphasis => "__",
        }
    }

    /// Opening HTML tag.
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Bold => "<b>",
            Self::Emphasis => "<em>",
        }
    }

    /// Closing HTML tag.
    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Bold => "</b>",
            Self::Emphasis => "</em>",
        }
    }

    /// Rewrite the first delimiter pair of this style.
    pub fn apply(self, line: &str) -> String {
        let delimiter = self.delimiter();
        match replace_first(line, delimiter, self.open_tag()) {
            Some(opened) => replace_first(&opened, delimiter, self.close_tag()).unwrap_or(opened),
            None => line.to_owned(),
        }
    }
}

/// Rewrite the first bold pair, then the first emphasis pair.
pub fn apply_style(line: &str) -> String {
    Style::Emphasis.apply(&Style::Bold.apply(line))
}
