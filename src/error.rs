use std::fmt;

use thiserror::Error;

/// Why a line was rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line starts with `[` but does not end with `]`.
    MalformedSectionHeader,
    /// The key already exists in the current section. The first value is kept.
    DuplicateKey,
    /// No `=` on the line, or `=` is its first character.
    UnparsableAssignment,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MalformedSectionHeader => "malformed section header".fmt(f),
            ParseErrorKind::DuplicateKey => "duplicate key".fmt(f),
            ParseErrorKind::UnparsableAssignment => "unparsable assignment".fmt(f),
        }
    }
}

/// A rejected input line, as recorded in a document's error log.
///
/// Parsing never stops on one of these. They accumulate in
/// [`Document::errors`](crate::Document::errors) in the order they were met.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} on line {line_number}: {line}")]
pub struct ParseError {
    kind: ParseErrorKind,
    line: String,
    line_number: usize,
    section: Option<String>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: &str, line_number: usize) -> Self {
        Self {
            kind,
            line: line.to_string(),
            line_number,
            section: None,
        }
    }

    pub(crate) fn duplicate(line: &str, line_number: usize, section: &str) -> Self {
        Self {
            section: Some(section.to_string()),
            ..Self::new(ParseErrorKind::DuplicateKey, line, line_number)
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The offending line, whitespace-trimmed.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// 1-based line number within the input of the parse call that saw it.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The section the line was read in. Only set for duplicate keys.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

/// Failure to convert a stored value into a typed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Key not found: [{section}] {key}")]
    NotFound { section: String, key: String },

    #[error("Cannot read '{value}' as {target}")]
    InvalidValue { value: String, target: &'static str },
}

/// Errors from operations that touch an I/O stream.
#[derive(Debug, Error)]
pub enum IniError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
