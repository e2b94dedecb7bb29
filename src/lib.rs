//! INI documents: parse, interpolate, and write them back.
//!
//! Inidoc reads line-oriented INI text into a [`Document`] of ordered
//! sections, records every line it could not make sense of instead of
//! failing, resolves `${key}` and `${section:key}` references across the
//! whole document, and serializes the result back to INI text.
//!
//! ```
//! use inidoc::Document;
//!
//! let mut doc = Document::new();
//! doc.parse_str("\
//! [paths]
//! root = /srv/app
//! logs = ${root}/logs
//!
//! [server]
//! access_log = ${paths:logs}/access.log
//! port = 8080
//! ");
//!
//! assert!(doc.is_well_formed());
//! doc.interpolate();
//! assert_eq!(doc.get("server", "access_log"), Some("/srv/app/logs/access.log"));
//! assert_eq!(doc.get_as::<u16>("server", "port"), Ok(8080));
//! ```
//!
//! # Format
//!
//! Every line is trimmed of ASCII whitespace first, then read as one of:
//!
//! | Line | Meaning |
//! |------|---------|
//! | *(empty)* | skipped |
//! | `; text` | comment, skipped |
//! | `[name]` | switch to section `name`, creating it if new |
//! | `key = value` | assignment in the current section |
//!
//! Keys before the first header belong to the section named `""`. The key is
//! everything before the first `=`, the value everything after it, each with
//! the whitespace next to the `=` removed. There are no inline comments, no
//! quoting and no line continuations: `x = 1 ; two` stores `1 ; two`.
//!
//! # Errors are data
//!
//! Parsing never fails on content. A header missing its `]`, a line with no
//! `=` (or starting with one), and a key already present in its section are
//! each recorded as a [`ParseError`] in [`Document::errors`] and skipped. The
//! first value of a key always wins. Check
//! [`is_well_formed()`](Document::is_well_formed) after parsing to know
//! whether the input was clean; the absence of an `Err` says nothing.
//!
//! Parsing the same document several times merges the inputs, with the same
//! first-write-wins rule applied across calls.
//!
//! # Interpolation
//!
//! [`Document::interpolate`] first rewrites each `${key}` that names a key of
//! its own section to `${section:key}`, then repeatedly replaces every
//! `${section:key}` with that key's current value until nothing changes or
//! [`MAX_INTERPOLATION_DEPTH`] passes have run. Cycles are not detected; they
//! simply stop at the limit with the token still in the value. A run also
//! stops as soon as a replacement would make a value longer than
//! [`MAX_VALUE_LEN`] bytes, so a value that contains itself twice cannot
//! grow without bound. References to missing keys stay as written. Use
//! [`Interpolator`] to pick other limits.
//!
//! # Defaults
//!
//! [`Document::merge_defaults`] adds a set of pairs to every section without
//! overwriting anything, and [`Document::apply_default_section`] does the same
//! from one of the document's own sections. Merge before interpolating if the
//! defaults contain references that should resolve per section.
//!
//! # Comment markers
//!
//! Only `;` starts a comment by default. Build a [`Parser`] with another
//! [`CommentPredicate`] (a [`CommentChars`] set or any `Fn(char) -> bool`) to
//! accept other markers.
//!
//! # Logging
//!
//! Rejected lines and interpolation outcomes are reported through the
//! [`log`](https://docs.rs/log) facade at `debug` level, individual
//! interpolation passes at `trace`. Nothing is printed unless the application
//! installs a logger.

pub mod error;
pub mod types;

mod classify;
mod document;
mod extract;
mod generate;
mod interpolate;
pub(crate) mod merge;
mod parser;
pub mod trim;

#[cfg(test)]
mod fixtures;

pub use document::Document;
pub use error::{ExtractError, IniError, ParseError, ParseErrorKind};
pub use extract::{Extract, extract, extract_into};
pub use generate::generate;
pub use interpolate::{
    InterpolationReport, Interpolator, MAX_INTERPOLATION_DEPTH, MAX_VALUE_LEN,
};
pub use parser::Parser;
pub use types::{CommentChars, CommentPredicate, Section, Semicolon};
