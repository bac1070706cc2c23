use serde::Serialize;
use strkit::{Card, Rectangle, Suit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The global `String` constructor, used for `instanceof` checks.
    #[wasm_bindgen(js_name = String)]
    type StringObject;
}

#[wasm_bindgen]
pub fn concatenate(a: &str, b: &str) -> String {
    strkit::concatenate(a, b)
}

#[wasm_bindgen]
pub fn length(s: &str) -> u32 {
    strkit::length(s) as u32
}

#[wasm_bindgen]
pub fn greet(first: &str, last: &str) -> String {
    strkit::greet(first, last)
}

#[wasm_bindgen(js_name = extractName)]
pub fn extract_name(greeting: &str) -> Result<String, JsValue> {
    strkit::extract_name(greeting)
        .map(String::from)
        .map_err(js_err)
}

#[wasm_bindgen(js_name = firstChar)]
pub fn first_char(s: &str) -> Result<String, JsValue> {
    strkit::first_char(s)
        .map(String::from)
        .map_err(js_err)
}

#[wasm_bindgen]
pub fn trim(s: &str) -> String {
    strkit::trim(s).to_owned()
}

#[wasm_bindgen]
pub fn repeat(s: &str, count: i32) -> Result<String, JsValue> {
    strkit::repeat(s, count as isize).map_err(js_err)
}

#[wasm_bindgen(js_name = removeFirstOccurrence)]
pub fn remove_first_occurrence(haystack: &str, needle: &str) -> String {
    strkit::remove_first_occurrence(haystack, needle)
}

#[wasm_bindgen(js_name = unbracketTag)]
pub fn unbracket_tag(tag: &str) -> String {
    strkit::unbracket_tag(tag)
}

#[wasm_bindgen]
pub fn upper(s: &str) -> String {
    strkit::upper(s)
}

#[wasm_bindgen(js_name = extractEmails)]
pub fn extract_emails(s: &str) -> Result<JsValue, JsValue> {
    to_js_value(&strkit::extract_emails(s))
}

#[wasm_bindgen(js_name = renderRectangle)]
pub fn render_rectangle(width: i32, height: i32) -> Result<String, JsValue> {
    strkit::render_rectangle(dimension(width), dimension(height)).map_err(js_err)
}

/// Renders a rectangle with a named glyph set (`light`, `heavy`, `double` or `ascii`).
#[wasm_bindgen(js_name = renderRectangleWith)]
pub fn render_rectangle_with(width: i32, height: i32, style: &str) -> Result<String, JsValue> {
    let glyphs = match style {
        "light" => strkit::BoxGlyphs::LIGHT,
        "heavy" => strkit::BoxGlyphs::HEAVY,
        "double" => strkit::BoxGlyphs::DOUBLE,
        "ascii" => strkit::BoxGlyphs::ASCII,
        _ => return Err(JsValue::from_str("unknown rectangle style")),
    };
    Rectangle::new(dimension(width), dimension(height))
        .map(|rect| rect.with_glyphs(glyphs).render())
        .map_err(js_err)
}

#[wasm_bindgen]
pub fn rot13(s: &str) -> String {
    strkit::rot13(s)
}

/// Returns whether `value` is a primitive string or a `String` object.
#[wasm_bindgen(js_name = isTextValue)]
pub fn is_text_value(value: &JsValue) -> bool {
    value.is_string() || value.is_instance_of::<StringObject>()
}

#[wasm_bindgen(js_name = cardIndex)]
pub fn card_index(token: &str) -> Result<u32, JsValue> {
    strkit::card_index(token)
        .map(|index| index as u32)
        .map_err(js_err)
}

/// Parses a card token into `{ token, suit, rank, index }`.
#[wasm_bindgen]
pub fn card(token: &str) -> Result<JsValue, JsValue> {
    let card = token.parse::<Card>().map_err(js_err)?;
    to_js_value(&JsCard::from(card))
}

/// Returns the card at `index` in the canonical deck.
#[wasm_bindgen(js_name = cardAt)]
pub fn card_at(index: i32) -> Result<JsValue, JsValue> {
    let card = card_from_js_index(index)
        .ok_or_else(|| JsValue::from_str("card index out of range"))?;
    to_js_value(&JsCard::from(card))
}

/// Returns the canonical deck as an array of tokens.
#[wasm_bindgen(js_name = canonicalDeck)]
pub fn canonical_deck() -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = strkit::canonical_deck()
        .map(|card| card.to_string())
        .collect();
    to_js_value(&tokens)
}

#[derive(Serialize)]
struct JsCard {
    token: String,
    suit: &'static str,
    rank: u8,
    index: u32,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            token: card.to_string(),
            suit: suit_to_str(card.suit()),
            rank: card.rank(),
            index: card.index() as u32,
        }
    }
}

/// Negative sizes become 0 so the library rejects them as invalid dimensions.
fn dimension(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

fn card_from_js_index(index: i32) -> Option<Card> {
    usize::try_from(index).ok().and_then(Card::from_index)
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strkit::RectangleError;

    #[test]
    fn negative_dimensions_are_rejected() {
        assert_eq!(dimension(6), 6);
        assert_eq!(
            Rectangle::new(dimension(-1), dimension(3)),
            Err(RectangleError::InvalidDimension { width: 0, height: 3 })
        );
        assert_eq!(
            strkit::render_rectangle(dimension(4), dimension(i32::MIN)),
            Err(RectangleError::InvalidDimension { width: 4, height: 0 })
        );
    }

    #[test]
    fn negative_card_index_has_no_card() {
        assert_eq!(card_from_js_index(-1), None);
        assert_eq!(card_from_js_index(52), None);
        assert_eq!(
            card_from_js_index(50).map(|card| card.to_string()).as_deref(),
            Some("Q♠")
        );
    }
}
