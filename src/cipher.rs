//! ROT13 substitution cipher.

use alloc::string::String;

/// Rotates an ASCII letter by 13 places; every other character is returned
/// unchanged.
#[must_use]
pub const fn rot13_char(c: char) -> char {
    match c {
        'A'..='Z' => rotate(c, b'A'),
        'a'..='z' => rotate(c, b'a'),
        _ => c,
    }
}

const fn rotate(c: char, base: u8) -> char {
    let offset = (c as u8 - base + 13) % 26;
    (base + offset) as char
}

/// Encodes `s` with ROT13.
///
/// Applying it twice returns the original string.
///
/// ```
/// assert_eq!(strkit::rot13("hello"), "uryyb");
/// assert_eq!(strkit::rot13("Gb trg gb gur bgure fvqr!"), "To get to the other side!");
/// ```
#[must_use]
pub fn rot13(s: &str) -> String {
    s.chars().map(rot13_char).collect()
}
