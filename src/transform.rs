//! Basic string transforms.
//!
//! Lengths and character positions are counted in Unicode scalar values, so
//! a suit glyph or a box-drawing character counts as one character.

use alloc::format;
use alloc::string::String;

use crate::error::{CharError, RepeatError};

/// Returns `a` followed by `b`.
#[must_use]
pub fn concatenate(a: &str, b: &str) -> String {
    let mut joined = String::with_capacity(a.len() + b.len());
    joined.push_str(a);
    joined.push_str(b);
    joined
}

/// Returns the number of characters in `s`.
///
/// ```
/// assert_eq!(strkit::length("aaaaa"), 5);
/// assert_eq!(strkit::length("K♠"), 2);
/// ```
#[must_use]
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// Returns `Hello, {first} {last}!`.
#[must_use]
pub fn greet(first: &str, last: &str) -> String {
    format!("Hello, {first} {last}!")
}

/// Returns the first character of `s`.
///
/// # Errors
///
/// Returns [`CharError::EmptyInput`] if `s` is empty.
pub fn first_char(s: &str) -> Result<char, CharError> {
    s.chars().next().ok_or_else(|| {
        tracing::debug!("first_char called on an empty string");
        CharError::EmptyInput
    })
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Removes leading and trailing whitespace.
///
/// Whitespace is any Unicode `White_Space` character plus the byte order
/// mark `U+FEFF`.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Returns `s` repeated `count` times.
///
/// # Errors
///
/// Returns [`RepeatError::InvalidCount`] if `count` is negative.
pub fn repeat(s: &str, count: isize) -> Result<String, RepeatError> {
    let Ok(times) = usize::try_from(count) else {
        tracing::debug!(count, "rejected negative repeat count");
        return Err(RepeatError::InvalidCount { count });
    };
    Ok(s.repeat(times))
}

/// Converts every cased character to upper case.
#[must_use]
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}
