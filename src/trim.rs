//! Whitespace trimming under the C locale.
//!
//! `char::is_ascii_whitespace` leaves out vertical tab, which C's `isspace`
//! accepts, so the predicate here is spelled out.

/// C-locale `isspace`: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip [`is_space`] characters from both ends.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Strip leading [`is_space`] characters.
pub fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

/// Strip trailing [`is_space`] characters.
pub fn trim_end(s: &str) -> &str {
    s.trim_end_matches(is_space)
}
