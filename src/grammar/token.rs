//! Token model: one space-delimited word of a query and where it came from.
//!
//! A `Token` borrows its text from the query string. Besides the text it
//! keeps its index in the token sequence (what error positions refer to) and
//! its byte span in the input, so callers can point back into the original
//! string.
use crate::grammar::keyword::Keyword;

/// A word of the query with its index and `[start, end)` byte span.
///
/// Invariants:
/// - `end >= start`
/// - `&input[start..end] == text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    pub const fn new(text: &'a str, index: usize, start: usize) -> Self {
        Self {
            text,
            index,
            start,
            end: start + text.len(),
        }
    }

    /// The keyword this word spells, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        Keyword::from_word(self.text)
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }

    /// True for `and` / `or`.
    pub fn is_connective(&self) -> bool {
        self.keyword().is_some_and(Keyword::is_connective)
    }

    /// Empty tokens come from consecutive, leading or trailing spaces.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
