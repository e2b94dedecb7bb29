//! Serialization back to INI text.
//!
//! Each section becomes `[name]`, its pairs `key=value`, and a blank line.
//! Values are written verbatim. Comments and original spacing are gone, so
//! re-parsing gives the same content but not the same bytes, and a value
//! containing a newline will not survive the trip.

use std::fmt;
use std::io;

use crate::document::Document;

/// Write `doc` as INI text to `out`.
pub fn generate<W: io::Write>(doc: &Document, mut out: W) -> io::Result<()> {
    write!(out, "{doc}")
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, section) in self.sections() {
            writeln!(f, "[{name}]")?;
            for (key, value) in section {
                writeln!(f, "{key}={value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
