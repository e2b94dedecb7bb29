//! Line-by-line parser.
//!
//! One pass, no backtracking. The only state carried between lines is the
//! name of the current section, which starts out as `""` for every parse
//! call. Rejected lines go to the document's error log and the pass moves on.

use std::io::BufRead;

use crate::classify::{Line, classify};
use crate::document::Document;
use crate::error::{IniError, ParseError};
use crate::trim;
use crate::types::{CommentPredicate, Semicolon};

const BOM: char = '\u{FEFF}';

/// Parses INI text into a [`Document`].
///
/// The comment predicate is fixed at construction:
///
/// ```
/// use inidoc::{CommentChars, Document, Parser};
///
/// let parser = Parser::with_comments(CommentChars::new([';', '#']));
/// let mut doc = Document::new();
/// parser.parse_str(&mut doc, "# note\n[a]\nx=1\n");
/// assert_eq!(doc.get("a", "x"), Some("1"));
/// assert!(doc.is_well_formed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser<P = Semicolon> {
    comments: P,
}

impl Parser {
    /// A parser treating only `;` as a comment marker.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: CommentPredicate> Parser<P> {
    pub fn with_comments(comments: P) -> Self {
        Self { comments }
    }

    /// Parse `text` and merge the result into `doc`.
    pub fn parse_str(&self, doc: &mut Document, text: &str) {
        let mut state = ParseState::default();
        for line in text.lines() {
            state.feed(doc, line, &self.comments);
        }
    }

    /// Parse every line of `reader` and merge the result into `doc`.
    ///
    /// Only a failing read is an error. Lines consumed before it stay in `doc`.
    pub fn parse_reader<R: BufRead>(&self, doc: &mut Document, reader: R) -> Result<(), IniError> {
        let mut state = ParseState::default();
        for line in reader.lines() {
            state.feed(doc, &line?, &self.comments);
        }
        Ok(())
    }
}

#[derive(Default)]
struct ParseState {
    section: String,
    line_number: usize,
}

impl ParseState {
    fn feed<P: CommentPredicate + ?Sized>(&mut self, doc: &mut Document, raw: &str, comments: &P) {
        self.line_number += 1;
        let raw = if self.line_number == 1 {
            raw.strip_prefix(BOM).unwrap_or(raw)
        } else {
            raw
        };
        let line = trim::trim(raw);

        match classify(line, comments) {
            Line::Blank | Line::Comment => {}
            Line::Section(name) => {
                doc.section_entry(name);
                self.section = name.to_string();
            }
            Line::Assignment { key, value } => {
                let section = doc.section_entry(&self.section);
                if section.contains_key(key) {
                    self.reject(doc, ParseError::duplicate(line, self.line_number, &self.section));
                } else {
                    section.insert(key.to_string(), value.to_string());
                }
            }
            Line::Invalid(kind) => {
                self.reject(doc, ParseError::new(kind, line, self.line_number));
            }
        }
    }

    fn reject(&self, doc: &mut Document, error: ParseError) {
        log::debug!("rejected line: {error}");
        doc.push_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::fixtures::test::{SERVER_INI, parsed};
    use crate::types::CommentChars;
    use std::io::{BufReader, Cursor, Write};

    #[test]
    fn well_formed_input_has_no_errors() {
        let doc = parsed(SERVER_INI);
        assert!(doc.is_well_formed(), "{:?}", doc.errors());
        assert_eq!(doc.get("server", "host"), Some("example.org"));
        assert_eq!(doc.get("database", "url"), Some("postgres://localhost/app"));
    }

    #[test]
    fn keys_before_any_header_go_to_default_section() {
        let doc = parsed("name=top\n[a]\nx=1\n");
        assert_eq!(doc.get("", "name"), Some("top"));
        assert_eq!(doc.get("a", "x"), Some("1"));
    }

    #[test]
    fn empty_header_selects_default_section() {
        let doc = parsed("[a]\nx=1\n[]\ny=2\n");
        assert_eq!(doc.get("", "y"), Some("2"));
    }

    #[test]
    fn first_write_wins() {
        let doc = parsed("[a]\nx=1\nx=2\n");
        assert_eq!(doc.get("a", "x"), Some("1"));
        assert_eq!(doc.errors().len(), 1);
        let err = &doc.errors()[0];
        assert_eq!(err.line(), "x=2");
        assert_eq!(err.kind(), ParseErrorKind::DuplicateKey);
        assert_eq!(err.section(), Some("a"));
        assert_eq!(err.line_number(), 3);
    }

    #[test]
    fn same_key_in_other_section_is_fine() {
        let doc = parsed("[a]\nx=1\n[b]\nx=2\n");
        assert!(doc.is_well_formed());
        assert_eq!(doc.get("b", "x"), Some("2"));
    }

    #[test]
    fn unclosed_header_is_logged_and_ignored() {
        let doc = parsed("[a\nx=1\n");
        assert_eq!(doc.errors().len(), 1);
        assert_eq!(doc.errors()[0].line(), "[a");
        assert_eq!(
            doc.errors()[0].kind(),
            ParseErrorKind::MalformedSectionHeader
        );
        assert!(!doc.contains_section("a"));
        // The section did not change, so the key lands in the default section.
        assert_eq!(doc.get("", "x"), Some("1"));
    }

    #[test]
    fn unclosed_header_keeps_previous_section() {
        let doc = parsed("[a]\n[b\ny=2\n");
        assert_eq!(doc.get("a", "y"), Some("2"));
    }

    #[test]
    fn header_without_keys_creates_section() {
        let doc = parsed("[empty]\n");
        assert!(doc.contains_section("empty"));
        assert!(doc.section("empty").unwrap().is_empty());
    }

    #[test]
    fn unparsable_lines_are_logged_in_order() {
        let doc = parsed("[a]\nno equals here\n=value\nok=1\n");
        let lines: Vec<&str> = doc.errors().iter().map(|e| e.line()).collect();
        assert_eq!(lines, ["no equals here", "=value"]);
        assert!(
            doc.errors()
                .iter()
                .all(|e| e.kind() == ParseErrorKind::UnparsableAssignment)
        );
        assert_eq!(doc.get("a", "ok"), Some("1"));
    }

    #[test]
    fn logged_line_is_trimmed() {
        let doc = parsed("   junk   \n");
        assert_eq!(doc.errors()[0].line(), "junk");
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let doc = parsed("; leading comment\n\n   ; indented comment\n[a]\n\nx=1\n");
        assert!(doc.is_well_formed());
        assert_eq!(doc.section("a").unwrap().len(), 1);
    }

    #[test]
    fn semicolon_inside_value_is_kept() {
        let doc = parsed("[a]\nx=1 ; not a comment\n");
        assert_eq!(doc.get("a", "x"), Some("1 ; not a comment"));
    }

    #[test]
    fn value_trim_boundary() {
        // Key is right-trimmed, value left-trimmed, the line as a whole trimmed
        // once; whitespace inside the value is untouched.
        let doc = parsed("[a]\n  path =  /usr/local  bin \t\n");
        assert_eq!(doc.get("a", "path"), Some("/usr/local  bin"));
    }

    #[test]
    fn crlf_line_endings() {
        let doc = parsed("[a]\r\nx=1\r\ny = 2 \r\n");
        assert!(doc.is_well_formed());
        assert_eq!(doc.get("a", "x"), Some("1"));
        assert_eq!(doc.get("a", "y"), Some("2"));
    }

    #[test]
    fn leading_bom_is_ignored() {
        let doc = parsed("\u{FEFF}[a]\nx=1\n");
        assert!(doc.is_well_formed());
        assert_eq!(doc.get("a", "x"), Some("1"));
    }

    #[test]
    fn hash_lines_are_errors_by_default() {
        let doc = parsed("# note\n");
        assert_eq!(doc.errors().len(), 1);
    }

    #[test]
    fn custom_comment_markers() {
        let parser = Parser::with_comments(CommentChars::new([';', '\'']));
        let mut doc = Document::new();
        parser.parse_str(&mut doc, "' VB comment\n; ini comment\n[a]\nx=1\n");
        assert!(doc.is_well_formed());
        assert_eq!(doc.get("a", "x"), Some("1"));
    }

    #[test]
    fn closure_comment_predicate() {
        let parser = Parser::with_comments(|c: char| c == '#');
        let mut doc = Document::new();
        parser.parse_str(&mut doc, "# note\n; now an error\n");
        assert_eq!(doc.errors().len(), 1);
        assert_eq!(doc.errors()[0].line(), "; now an error");
    }

    #[test]
    fn repeated_parses_merge() {
        let mut doc = parsed("[a]\nx=1\n");
        doc.parse_str("[a]\ny=2\n[b]\nz=3\n");
        assert_eq!(doc.get("a", "x"), Some("1"));
        assert_eq!(doc.get("a", "y"), Some("2"));
        assert_eq!(doc.get("b", "z"), Some("3"));
        assert!(doc.is_well_formed());
    }

    #[test]
    fn repeated_parse_rejects_existing_key() {
        let mut doc = parsed("[a]\nx=1\n");
        doc.parse_str("[a]\nx=2\n");
        assert_eq!(doc.get("a", "x"), Some("1"));
        assert_eq!(doc.errors()[0].line(), "x=2");
        assert_eq!(doc.errors()[0].line_number(), 2);
    }

    #[test]
    fn each_parse_starts_in_default_section() {
        let mut doc = parsed("[a]\nx=1\n");
        doc.parse_str("y=2\n");
        assert_eq!(doc.get("", "y"), Some("2"));
        assert_eq!(doc.get("a", "y"), None);
    }

    #[test]
    fn parse_from_reader() {
        let mut doc = Document::new();
        doc.parse_reader(Cursor::new(SERVER_INI)).unwrap();
        assert_eq!(doc, parsed(SERVER_INI));
    }

    #[test]
    fn parse_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SERVER_INI.as_bytes()).unwrap();
        let reader = BufReader::new(std::fs::File::open(file.path()).unwrap());

        let mut doc = Document::new();
        doc.parse_reader(reader).unwrap();
        assert_eq!(doc.get("server", "port"), Some("8080"));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let mut doc = Document::new();
        let bytes: &[u8] = b"[a]\nx=1\n\xFF\xFE=2\n";
        let result = doc.parse_reader(bytes);
        assert!(matches!(result, Err(IniError::Io(_))));
        assert_eq!(doc.get("a", "x"), Some("1"));
    }
}
