//! Template and token extraction.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::TemplateError;

const GREETING_PREFIX: &str = "Hello, ";
const GREETING_SUFFIX: &str = "!";

/// Extracts `First Last` from a `Hello, First Last!` greeting.
///
/// ```
/// assert_eq!(strkit::extract_name("Hello, John Doe!"), Ok("John Doe"));
/// ```
///
/// # Errors
///
/// Returns [`TemplateError::Format`] unless the input is the greeting prefix,
/// exactly two non-empty names separated by one space, and a single closing
/// `!`. Names may not contain `!`.
pub fn extract_name(greeting: &str) -> Result<&str, TemplateError> {
    let name = greeting
        .strip_prefix(GREETING_PREFIX)
        .and_then(|rest| rest.strip_suffix(GREETING_SUFFIX))
        .filter(|name| {
            name.split_once(' ').is_some_and(|(first, last)| {
                !first.is_empty()
                    && !last.is_empty()
                    && !last.contains(' ')
                    && !name.contains(GREETING_SUFFIX)
            })
        });

    name.ok_or_else(|| {
        tracing::debug!(greeting, "greeting does not match the template");
        TemplateError::Format
    })
}

/// Removes the leftmost occurrence of `needle` from `haystack`.
///
/// The input is returned unchanged when `needle` does not occur or is empty.
#[must_use]
pub fn remove_first_occurrence(haystack: &str, needle: &str) -> String {
    let mut result = String::from(haystack);
    if let Some(start) = haystack.find(needle) {
        result.replace_range(start..start + needle.len(), "");
    }
    result
}

/// Strips every `<` and `>` from `tag`.
///
/// Angle brackets inside the tag are removed as well, so `<a<b>>` becomes
/// `ab`.
#[must_use]
pub fn unbracket_tag(tag: &str) -> String {
    tag.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Splits a `;`-delimited address list.
///
/// Parts are returned verbatim; an empty input yields one empty part.
#[must_use]
pub fn extract_emails(s: &str) -> Vec<&str> {
    s.split(';').collect()
}
