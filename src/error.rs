//! Error types for toolkit operations.

use thiserror::Error;

/// Errors returned when an operation is undefined on its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CharError {
    /// The input string is empty.
    #[error("input string is empty")]
    EmptyInput,
}

/// Errors that can occur while repeating a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RepeatError {
    /// The repeat count is negative.
    #[error("invalid repeat count {count}")]
    InvalidCount {
        /// The rejected count.
        count: isize,
    },
}

/// Errors that can occur while extracting values from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The input does not match the expected template.
    #[error("input does not match the template")]
    Format,
}

/// Errors that can occur while building a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RectangleError {
    /// Width or height is below the two cells needed for the corners.
    #[error("invalid rectangle dimension {width}x{height}")]
    InvalidDimension {
        /// The requested width.
        width: usize,
        /// The requested height.
        height: usize,
    },
}

/// Errors that can occur while parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not two or three characters long.
    #[error("card token must be two or three characters")]
    InvalidLength,
    /// The rank part is not one of `A`, `2`-`10`, `J`, `Q`, `K`.
    #[error("unknown card rank")]
    UnknownRank,
    /// The suit glyph is not one of `♣`, `♦`, `♥`, `♠`.
    #[error("unknown card suit")]
    UnknownSuit,
}
