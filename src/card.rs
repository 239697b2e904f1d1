//! Card types and numeric card codes.

use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// The declaration order is the suit ordinal used to break ties between
/// cards of equal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in ordinal order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the ordinal of the suit (0 for hearts through 3 for spades).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Numeric code of the joker.
pub const JOKER_CODE: u8 = 0;

/// Number of standard cards per deck.
pub const DECK_SIZE: usize = 52;

/// Ranks per suit.
const RANKS_PER_SUIT: u8 = 13;

/// A playing card.
///
/// Cards are plain values: every copy is independent of the hand it came
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    /// The joker. It has no suit and carries rank 0.
    Joker,
    /// A standard card.
    Standard {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
        rank: u8,
    },
}

impl Card {
    /// Creates a new standard card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted; [`HandAnalysis::high_card_plus_one`] relies on this to
    /// report rank 14 above a King.
    ///
    /// [`HandAnalysis::high_card_plus_one`]: crate::HandAnalysis::high_card_plus_one
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self::Standard { suit, rank }
    }

    /// Creates a card from its numeric code.
    ///
    /// Code 0 is the joker. Codes 1..=52 run through the suits in ordinal
    /// order, Ace to King within each suit: 1 is the Ace of hearts, 14 the
    /// Ace of diamonds, 52 the King of spades.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCode`] for codes above 52.
    ///
    /// # Example
    ///
    /// ```
    /// use hand_analysis::{Card, Suit};
    ///
    /// assert_eq!(Card::from_code(40).unwrap(), Card::new(Suit::Spades, 1));
    /// assert!(Card::from_code(0).unwrap().is_joker());
    /// assert!(Card::from_code(53).is_err());
    /// ```
    pub const fn from_code(code: u8) -> Result<Self, CardError> {
        if code == JOKER_CODE {
            return Ok(Self::Joker);
        }
        if code as usize > DECK_SIZE {
            return Err(CardError::InvalidCode(code));
        }
        let offset = code - 1;
        let suit = Suit::ALL[(offset / RANKS_PER_SUIT) as usize];
        Ok(Self::new(suit, offset % RANKS_PER_SUIT + 1))
    }

    /// Returns the numeric code of the card.
    ///
    /// Returns `None` for cards with a rank outside 1..=13.
    #[must_use]
    pub const fn code(&self) -> Option<u8> {
        match *self {
            Self::Joker => Some(JOKER_CODE),
            Self::Standard {
                suit,
                rank: rank @ 1..=RANKS_PER_SUIT,
            } => Some(suit.ordinal() * RANKS_PER_SUIT + rank),
            Self::Standard { .. } => None,
        }
    }

    /// Returns whether the card is the joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns the rank of the card, or 0 for the joker.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match *self {
            Self::Joker => 0,
            Self::Standard { rank, .. } => rank,
        }
    }

    /// Returns the suit of the card, or `None` for the joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match *self {
            Self::Joker => None,
            Self::Standard { suit, .. } => Some(suit),
        }
    }

    /// Returns whether the card has the given rank.
    #[must_use]
    pub const fn is_rank(&self, rank: u8) -> bool {
        self.rank() == rank
    }

    /// Returns whether the card is a standard card of the given suit.
    #[must_use]
    pub fn is_suit(&self, suit: Suit) -> bool {
        self.suit() == Some(suit)
    }

    /// Returns whether both cards carry the same rank.
    #[must_use]
    pub const fn has_same_rank_as(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }

    /// Returns whether this card ranks strictly above `other`.
    ///
    /// The joker is higher than every standard card. Standard cards compare
    /// by rank, then by suit ordinal.
    #[must_use]
    pub fn is_higher_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Returns the absolute rank distance between two standard cards.
    ///
    /// Returns `None` if either card is the joker.
    #[must_use]
    pub const fn value_between_ranks(&self, other: &Self) -> Option<u8> {
        match (*self, *other) {
            (Self::Standard { rank: a, .. }, Self::Standard { rank: b, .. }) => Some(a.abs_diff(b)),
            _ => None,
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Joker, Self::Joker) => Ordering::Equal,
            (Self::Joker, Self::Standard { .. }) => Ordering::Greater,
            (Self::Standard { .. }, Self::Joker) => Ordering::Less,
            (Self::Standard { suit: sa, rank: ra }, Self::Standard { suit: sb, rank: rb }) => {
                ra.cmp(rb).then_with(|| sa.cmp(sb))
            }
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Joker => f.write_str("Jkr"),
            Self::Standard { suit, rank } => match rank {
                1 => write!(f, "A{suit}"),
                11 => write!(f, "J{suit}"),
                12 => write!(f, "Q{suit}"),
                13 => write!(f, "K{suit}"),
                _ => write!(f, "{rank}{suit}"),
            },
        }
    }
}
