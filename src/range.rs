//! Compact ranges for matched spans inside a single line.
//!
//! Uses `u32` offsets like the rest of the crate's scanning code; a single
//! line is never expected to reach 4GB.

/// Byte range into a line.
///
/// # Example
/// ```
/// use markline::Range;
///
/// let line = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice(line), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self::new(start as u32, end as u32)
    }

    /// The text this range covers.
    ///
    /// Ranges produced by the scanners always sit on ASCII delimiter
    /// boundaries, so they are valid `str` boundaries as well.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start_usize()..self.end_usize()]
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}

/// A delimited span such as `[[text]]`.
///
/// `outer` covers the delimiters, `inner` only the enclosed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimited {
    pub outer: Range,
    pub inner: Range,
}

impl Delimited {
    /// Splice `replacement` over the whole span, delimiters included.
    pub fn replace(&self, line: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(line.len() + replacement.len());
        out.push_str(&line[..self.outer.start_usize()]);
        out.push_str(replacement);
        out.push_str(&line[self.outer.end_usize()..]);
        out
    }
}
