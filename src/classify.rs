//! Single-line classification.
//!
//! Works on one already-trimmed line and carries no state; the parser owns
//! the current section and decides what to do with each [`Line`].

use crate::error::ParseErrorKind;
use crate::trim;
use crate::types::CommentPredicate;

const SECTION_START: char = '[';
const SECTION_END: char = ']';
const ASSIGN: char = '=';

/// What a trimmed line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// `[name]`. The name may be empty.
    Section(&'a str),
    /// `key=value`, key right-trimmed, value left-trimmed.
    Assignment { key: &'a str, value: &'a str },
    Invalid(ParseErrorKind),
}

/// Classify `line`, which must already be trimmed.
pub fn classify<'a, P: CommentPredicate + ?Sized>(line: &'a str, comments: &P) -> Line<'a> {
    let Some(front) = line.chars().next() else {
        return Line::Blank;
    };

    if comments.is_comment(front) {
        return Line::Comment;
    }

    if front == SECTION_START {
        // A lone "[" both starts and ends with the same character; it is not a header.
        return match line[1..].strip_suffix(SECTION_END) {
            Some(name) => Line::Section(name),
            None => Line::Invalid(ParseErrorKind::MalformedSectionHeader),
        };
    }

    match line.find(ASSIGN) {
        Some(pos) if pos > 0 => Line::Assignment {
            key: trim::trim_end(&line[..pos]),
            value: trim::trim_start(&line[pos + 1..]),
        },
        _ => Line::Invalid(ParseErrorKind::UnparsableAssignment),
    }
}
