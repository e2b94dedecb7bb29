use indexmap::IndexMap;

/// Keys to values within one section, in insertion order.
pub type Section = IndexMap<String, String>;

/// Decides whether a line is a comment from its first non-space character.
///
/// The parser asks this once per non-empty line. Swap the implementation
/// to support other comment markers; the parser itself does not change.
pub trait CommentPredicate {
    fn is_comment(&self, c: char) -> bool;
}

/// The default: only `;` starts a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Semicolon;

impl CommentPredicate for Semicolon {
    fn is_comment(&self, c: char) -> bool {
        c == ';'
    }
}

/// Any of a fixed set of marker characters starts a comment.
///
/// ```
/// use inidoc::{CommentChars, CommentPredicate};
///
/// // Visual Basic style files also use `'`.
/// let vb = CommentChars::new([';', '\'']);
/// assert!(vb.is_comment('\''));
/// assert!(!vb.is_comment('#'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentChars(Vec<char>);

impl CommentChars {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self(chars.into_iter().collect())
    }
}

impl CommentPredicate for CommentChars {
    fn is_comment(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl<F> CommentPredicate for F
where
    F: Fn(char) -> bool,
{
    fn is_comment(&self, c: char) -> bool {
        self(c)
    }
}
