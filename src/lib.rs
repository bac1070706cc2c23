//! A small string toolkit with optional `no_std` support.
//!
//! Every operation is a pure function over its arguments: basic transforms,
//! template extraction, ROT13, box-drawing rectangles and playing-card
//! lookup. Rejected inputs are reported through small error enums and logged
//! at debug level through [`tracing`].
//!
//! # Example
//!
//! ```
//! use strkit::{card_index, render_rectangle, rot13};
//!
//! assert_eq!(rot13("uryyb"), "hello");
//! assert_eq!(card_index("Q♠"), Ok(50));
//! assert_eq!(render_rectangle(2, 2), Ok(String::from("┌┐\n└┘\n")));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cipher;
pub mod error;
pub mod rectangle;
pub mod template;
pub mod transform;
pub mod value;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit, canonical_deck, card_index};
pub use cipher::{rot13, rot13_char};
pub use error::{CardError, CharError, RectangleError, RepeatError, TemplateError};
pub use rectangle::{BoxGlyphs, Rectangle, char_at, render_rectangle};
pub use template::{extract_emails, extract_name, remove_first_occurrence, unbracket_tag};
pub use transform::{concatenate, first_char, greet, length, repeat, trim, upper};
pub use value::is_text_value;
