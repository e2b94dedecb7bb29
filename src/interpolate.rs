//! `${key}` and `${section:key}` interpolation.
//!
//! Runs in two phases over the whole document:
//!
//! 1. **Localize.** In each section, every `${key}` naming a key of that same
//!    section is rewritten to `${section:key}`. One pass.
//! 2. **Resolve.** A symbol table mapping every `${section:key}` to the
//!    current value of that key is built, and every symbol is replaced in
//!    every value of every section. If anything changed, the table is rebuilt
//!    from the new values and the pass repeats, up to a fixed number of passes.
//!
//! There is no cycle detection. A value that refers to itself (directly or
//! through others) is expanded until the pass limit and then left as is,
//! with the unresolved token still in place. References to keys that do not
//! exist are never touched.

use crate::document::Document;
use crate::types::Section;

/// Default limit on resolve passes.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

/// Default limit, in bytes, on the length of any value during interpolation.
pub const MAX_VALUE_LEN: usize = 64 * 1024;

const TOKEN_START: &str = "${";
const TOKEN_SEP: char = ':';
const TOKEN_END: char = '}';

/// How an interpolation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationReport {
    /// Resolve passes performed, counting one cut short by the length limit.
    pub passes: usize,
    /// `true` if the last pass changed nothing, `false` if the pass limit or
    /// the value length limit cut the run short.
    pub converged: bool,
}

/// Runs interpolation with configurable limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpolator {
    max_depth: usize,
    max_value_len: usize,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self {
            max_depth: MAX_INTERPOLATION_DEPTH,
            max_value_len: MAX_VALUE_LEN,
        }
    }
}

/// A replacement would have made a value longer than the limit.
struct TooLong;

impl Interpolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of resolve passes (default: [`MAX_INTERPOLATION_DEPTH`]).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Limit the length in bytes any value may reach (default: [`MAX_VALUE_LEN`]).
    ///
    /// A replacement that would go past it is not made and the run stops
    /// there. Values longer than this before the run are left alone unless
    /// a replacement touches them.
    pub fn max_value_len(mut self, len: usize) -> Self {
        self.max_value_len = len;
        self
    }

    pub fn run(&self, doc: &mut Document) -> InterpolationReport {
        let mut passes = 0;
        let converged = match self.localize(doc) {
            Err(TooLong) => false,
            Ok(()) => loop {
                if passes == self.max_depth {
                    break false;
                }
                passes += 1;

                match self.resolve_pass(doc) {
                    Ok(true) => log::trace!("interpolation pass {passes}: changed"),
                    Ok(false) => break true,
                    Err(TooLong) => break false,
                }
            },
        };

        if converged {
            log::debug!("interpolation converged after {passes} passes");
        } else {
            log::debug!("interpolation stopped after {passes} passes; references may remain");
        }
        InterpolationReport { passes, converged }
    }

    fn localize(&self, doc: &mut Document) -> Result<(), TooLong> {
        for (name, section) in doc.sections_mut() {
            let symbols = local_symbols(name, section);
            self.replace_symbols(&symbols, section)?;
        }
        Ok(())
    }

    fn resolve_pass(&self, doc: &mut Document) -> Result<bool, TooLong> {
        let symbols = global_symbols(doc);
        let mut changed = false;
        for section in doc.sections_mut().values_mut() {
            changed |= self.replace_symbols(&symbols, section)?;
        }
        Ok(changed)
    }

    /// Apply each symbol, in order, to every value of `section`.
    fn replace_symbols(
        &self,
        symbols: &Symbols,
        section: &mut Section,
    ) -> Result<bool, TooLong> {
        let mut changed = false;
        for (from, to) in symbols {
            for value in section.values_mut() {
                changed |= replace_all(value, from, to, self.max_value_len).inspect_err(|_| {
                    log::debug!("interpolating {from} would exceed {} bytes", self.max_value_len);
                })?;
            }
        }
        Ok(changed)
    }
}

type Symbols = Vec<(String, String)>;

fn local_symbol(name: &str) -> String {
    format!("{TOKEN_START}{name}{TOKEN_END}")
}

fn global_symbol(section: &str, name: &str) -> String {
    local_symbol(&format!("{section}{TOKEN_SEP}{name}"))
}

fn local_symbols(section_name: &str, section: &Section) -> Symbols {
    section
        .keys()
        .map(|key| (local_symbol(key), global_symbol(section_name, key)))
        .collect()
}

fn global_symbols(doc: &Document) -> Symbols {
    doc.entries()
        .map(|(section, key, value)| (global_symbol(section, key), value.to_string()))
        .collect()
}

/// Replace every non-overlapping `from` in `value`, left to right. Text just
/// inserted is not searched again. Returns whether anything was replaced.
///
/// Stops with `TooLong` before a replacement that would make `value` longer
/// than `max_len`; replacements already made stay.
fn replace_all(
    value: &mut String,
    from: &str,
    to: &str,
    max_len: usize,
) -> Result<bool, TooLong> {
    debug_assert!(!from.is_empty());

    let mut changed = false;
    let mut start = 0;
    while let Some(offset) = value[start..].find(from) {
        if to.len() > from.len() && value.len() - from.len() + to.len() > max_len {
            return Err(TooLong);
        }
        let pos = start + offset;
        value.replace_range(pos..pos + from.len(), to);
        start = pos + to.len();
        changed = true;
    }
    Ok(changed)
}
