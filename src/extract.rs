//! Typed reads of stored string values.
//!
//! A conversion succeeds only when the whole value, apart from surrounding
//! whitespace, is one token of the target type: `"1abc"` is neither an
//! integer nor a boolean. Booleans are `true` and `false` exactly. Floats
//! take decimal or exponent notation; `inf` and `nan` spellings are refused.
//! Strings always succeed and are copied verbatim.

use crate::error::ExtractError;
use crate::trim;

/// A type a stored value can be read as.
pub trait Extract: Sized {
    /// Type name used in error messages.
    const TARGET: &'static str;

    /// `None` if `value` is not entirely one token of this type.
    fn from_value(value: &str) -> Option<Self>;
}

/// Convert `value` to `T`.
///
/// ```
/// assert_eq!(inidoc::extract::<bool>("true"), Ok(true));
/// assert_eq!(inidoc::extract::<u16>(" 8080 "), Ok(8080));
/// assert!(inidoc::extract::<i32>("1abc").is_err());
/// ```
pub fn extract<T: Extract>(value: &str) -> Result<T, ExtractError> {
    T::from_value(value).ok_or_else(|| ExtractError::InvalidValue {
        value: value.into(),
        target: T::TARGET,
    })
}

/// Convert `value` into `dst`. On failure `dst` is left untouched and
/// `false` is returned.
pub fn extract_into<T: Extract>(value: &str, dst: &mut T) -> bool {
    match T::from_value(value) {
        Some(v) => {
            *dst = v;
            true
        }
        None => false,
    }
}

macro_rules! extract_via_from_str {
    ($($t:ty),* $(,)?) => {
        $(
            impl Extract for $t {
                const TARGET: &'static str = stringify!($t);

                fn from_value(value: &str) -> Option<Self> {
                    trim::trim(value).parse().ok()
                }
            }
        )*
    };
}

extract_via_from_str!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

fn is_float_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

macro_rules! extract_float {
    ($($t:ty),*) => {
        $(
            impl Extract for $t {
                const TARGET: &'static str = stringify!($t);

                fn from_value(value: &str) -> Option<Self> {
                    let token = trim::trim(value);
                    if !is_float_token(token) {
                        return None;
                    }
                    token.parse().ok()
                }
            }
        )*
    };
}

extract_float!(f32, f64);

impl Extract for char {
    const TARGET: &'static str = "char";

    fn from_value(value: &str) -> Option<Self> {
        let mut chars = trim::trim(value).chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl Extract for String {
    const TARGET: &'static str = "String";

    fn from_value(value: &str) -> Option<Self> {
        Some(value.to_string())
    }
}
