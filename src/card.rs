//! Card types and canonical deck ordering.
//!
//! The canonical deck lists the clubs first, then diamonds, hearts and
//! spades; within a suit the ranks run `A, 2, ..., 10, J, Q, K`. A card is
//! written as its rank token followed by the suit glyph, e.g. `A♣` or `10♥`.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card suit, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs (`♣`).
    Clubs,
    /// Diamonds (`♦`).
    Diamonds,
    /// Hearts (`♥`).
    Hearts,
    /// Spades (`♠`).
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the zero-based position of the suit in the canonical deck.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
        }
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// Looks up a suit by its glyph.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '♣' => Some(Self::Clubs),
            '♦' => Some(Self::Diamonds),
            '♥' => Some(Self::Hearts),
            '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// The rank runs from 1 (Ace) through 10, then 11 = Jack, 12 = Queen,
    /// 13 = King. Returns `None` for ranks outside `1..=13`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank >= 1 && rank <= 13 {
            Some(Self { suit, rank })
        } else {
            None
        }
    }

    /// Returns the card at `index` in the canonical deck.
    ///
    /// ```
    /// use strkit::{Card, Suit};
    ///
    /// assert_eq!(Card::from_index(50), Card::new(Suit::Spades, 12));
    /// assert_eq!(Card::from_index(52), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        let suit = Suit::ALL[index / RANKS_PER_SUIT];
        Self::new(suit, (index % RANKS_PER_SUIT) as u8 + 1)
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the zero-based position of the card in the canonical deck.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.suit.ordinal() * RANKS_PER_SUIT + (self.rank as usize - 1)
    }
}

fn parse_rank(token: &str) -> Option<u8> {
    match token {
        "A" => Some(1),
        "10" => Some(10),
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        _ => match token.as_bytes() {
            [digit @ b'2'..=b'9'] => Some(digit - b'0'),
            _ => None,
        },
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if !(2..=3).contains(&token.chars().count()) {
            return Err(CardError::InvalidLength);
        }

        let glyph = token.chars().next_back().ok_or(CardError::InvalidLength)?;
        let suit = Suit::from_glyph(glyph).ok_or(CardError::UnknownSuit)?;
        let rank_token = &token[..token.len() - glyph.len_utf8()];
        let rank = parse_rank(rank_token).ok_or(CardError::UnknownRank)?;

        Self::new(suit, rank).ok_or(CardError::UnknownRank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => f.write_str("A")?,
            11 => f.write_str("J")?,
            12 => f.write_str("Q")?,
            13 => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.glyph())
    }
}

/// Returns the zero-based index of `token` in the canonical deck.
///
/// ```
/// use strkit::card_index;
///
/// assert_eq!(card_index("A♣"), Ok(0));
/// assert_eq!(card_index("10♣"), Ok(9));
/// assert_eq!(card_index("K♠"), Ok(51));
/// ```
///
/// # Errors
///
/// Returns a [`CardError`] if the token is not a rank token followed by a
/// suit glyph.
pub fn card_index(token: &str) -> Result<usize, CardError> {
    token
        .parse::<Card>()
        .map(|card| card.index())
        .inspect_err(|err| tracing::debug!(token, error = %err, "rejected card token"))
}

/// Returns the 52 cards in canonical deck order.
#[must_use]
pub fn canonical_deck() -> impl Iterator<Item = Card> {
    (0..DECK_SIZE).filter_map(Card::from_index)
}
