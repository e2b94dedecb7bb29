//! The document store: ordered sections of ordered key-value pairs, plus the
//! log of lines the parser rejected.

use std::io::BufRead;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, IniError, ParseError};
use crate::extract::{self, Extract};
use crate::interpolate::{InterpolationReport, Interpolator};
use crate::merge;
use crate::parser::Parser;
use crate::types::Section;

/// A parsed INI document.
///
/// Sections and keys keep the order in which they were first seen. Within a
/// section the first value written for a key wins; later ones are rejected
/// into [`errors`](Self::errors).
///
/// Serializes as a map of section name to a map of key to value. The error
/// log is not part of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
    #[serde(skip)]
    errors: Vec<ParseError>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` with `;` comments and merge it into this document.
    pub fn parse_str(&mut self, text: &str) {
        Parser::new().parse_str(self, text);
    }

    /// Parse every line of `reader` with `;` comments and merge it into this document.
    pub fn parse_reader<R: BufRead>(&mut self, reader: R) -> Result<(), IniError> {
        Parser::new().parse_reader(self, reader)
    }

    /// Resolve `${key}` and `${section:key}` references in place.
    pub fn interpolate(&mut self) -> InterpolationReport {
        Interpolator::new().run(self)
    }

    /// Add every pair of `defaults` to every section, keeping existing keys.
    pub fn merge_defaults(&mut self, defaults: &Section) {
        for section in self.sections.values_mut() {
            merge::fill_missing(section, defaults);
        }
    }

    /// [`merge_defaults`](Self::merge_defaults) using this document's own
    /// section `name`. Returns `false` if there is no such section.
    pub fn apply_default_section(&mut self, name: &str) -> bool {
        let Some(defaults) = self.sections.get(name).cloned() else {
            return false;
        };
        self.merge_defaults(&defaults);
        true
    }

    /// Drop all sections and errors.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.errors.clear();
    }

    pub fn sections(&self) -> &IndexMap<String, Section> {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Direct access to a section's pairs. Unlike [`insert`](Self::insert),
    /// writes through this overwrite existing keys.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// Look up a value and convert it, see [`extract`](crate::extract()).
    pub fn get_as<T: Extract>(&self, section: &str, key: &str) -> Result<T, ExtractError> {
        let value = self
            .get(section, key)
            .ok_or_else(|| ExtractError::NotFound {
                section: section.into(),
                key: key.into(),
            })?;
        extract::extract(value)
    }

    /// Insert a value unless the key already exists in that section.
    /// Creates the section if needed. Returns whether the value was stored.
    pub fn insert(&mut self, section: &str, key: &str, value: &str) -> bool {
        let section = self.section_entry(section);
        if section.contains_key(key) {
            return false;
        }
        section.insert(key.to_string(), value.to_string());
        true
    }

    /// Every `(section, key, value)` triple in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections.iter().flat_map(|(name, section)| {
            section
                .iter()
                .map(move |(key, value)| (name.as_str(), key.as_str(), value.as_str()))
        })
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Lines rejected by every parse so far, in encounter order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// `true` when no parsed line has been rejected.
    pub fn is_well_formed(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn section_entry(&mut self, name: &str) -> &mut Section {
        if !self.sections.contains_key(name) {
            self.sections.insert(name.to_string(), Section::new());
        }
        &mut self.sections[name]
    }

    pub(crate) fn sections_mut(&mut self) -> &mut IndexMap<String, Section> {
        &mut self.sections
    }

    pub(crate) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}
