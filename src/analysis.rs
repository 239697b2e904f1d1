//! Rank, suit and ordering queries over a single hand.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, Suit};
use crate::error::CardError;

/// A card together with its position in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedCard {
    /// Position of the card in ingestion order.
    pub index: usize,
    /// The card itself.
    pub card: Card,
}

/// Analysis of a small hand of cards.
///
/// The hand is replaced wholesale by [`update`](Self::update) or
/// [`update_types`](Self::update_types); every other method is a read-only
/// query recomputed from the held cards. Indexes always refer to ingestion
/// order.
///
/// # Example
///
/// ```
/// use hand_analysis::HandAnalysis;
///
/// let mut hand = HandAnalysis::new();
/// hand.update_types(&[1, 2, 3, 4, 13]).unwrap();
///
/// assert_eq!(hand.value_between(0, 4), Some(12));
/// assert_eq!(hand.high_card().map(|high| high.index), Some(4));
/// assert!(hand.no_same_ranks());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandAnalysis {
    /// Cards in ingestion order.
    cards: Vec<Card>,
}

impl HandAnalysis {
    /// Creates an analysis holding an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an analysis holding copies of `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        hand.update(cards);
        hand
    }

    /// Creates an analysis from numeric card codes.
    ///
    /// # Errors
    ///
    /// Returns an error if any code is not a valid card code.
    pub fn from_codes(codes: &[u8]) -> Result<Self, CardError> {
        let mut hand = Self::new();
        hand.update_types(codes)?;
        Ok(hand)
    }

    /// Replaces the hand with copies of `cards`, keeping their order.
    pub fn update(&mut self, cards: &[Card]) {
        self.cards = cards.to_vec();
        log::trace!("hand replaced with {} cards: {:?}", self.cards.len(), self.cards);
    }

    /// Replaces the hand with one fresh card per numeric code, keeping their
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if any code is not a valid card code. The held hand
    /// is left unchanged in that case.
    pub fn update_types(&mut self, codes: &[u8]) -> Result<(), CardError> {
        let cards = codes
            .iter()
            .map(|&code| Card::from_code(code))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| log::debug!("rejected hand {codes:?}: {err}"))?;
        self.update(&cards);
        Ok(())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in ingestion order.
    #[must_use]
    pub fn unordered(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Returns the cards sorted ascending: by rank, then suit, with jokers
    /// last.
    #[must_use]
    pub fn ordered(&self) -> Vec<Card> {
        let mut cards = self.unordered();
        cards.sort_unstable();
        cards
    }

    /// Returns the number of jokers in the hand.
    #[must_use]
    pub fn num_jokers(&self) -> usize {
        self.cards.iter().filter(|card| card.is_joker()).count()
    }

    /// Returns the index of every card that is not a joker.
    #[must_use]
    pub fn non_jokers(&self) -> Vec<usize> {
        self.indexes_where(|card| !card.is_joker())
    }

    /// Returns the index of every joker.
    #[must_use]
    pub fn jokers(&self) -> Vec<usize> {
        self.indexes_where(Card::is_joker)
    }

    /// Returns a copy of the card at `index`, or `None` if there is no card
    /// at that index.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the rank of every card in ingestion order (0 for jokers).
    #[must_use]
    pub fn ranks(&self) -> Vec<u8> {
        self.cards.iter().map(Card::rank).collect()
    }

    /// Returns the suit of every card in ingestion order (`None` for jokers).
    #[must_use]
    pub fn suits(&self) -> Vec<Option<Suit>> {
        self.cards.iter().map(Card::suit).collect()
    }

    /// Returns the number of cards with the given rank.
    ///
    /// Jokers only match rank 0.
    #[must_use]
    pub fn contains_rank(&self, rank: u8) -> usize {
        self.cards.iter().filter(|card| card.is_rank(rank)).count()
    }

    /// Returns whether the hand holds at least one card of every given rank.
    #[must_use]
    pub fn contains_ranks(&self, ranks: &[u8]) -> bool {
        ranks.iter().all(|&rank| self.contains_rank(rank) > 0)
    }

    /// Returns whether the cards at `indexes` all share one rank.
    ///
    /// Returns `false` if `indexes` is empty or any index is out of range.
    #[must_use]
    pub fn same_rank(&self, indexes: &[usize]) -> bool {
        self.same_by(indexes, Card::rank)
    }

    /// Returns whether the cards at `indexes` all share one suit.
    ///
    /// Jokers only share a suit with other jokers. Returns `false` if
    /// `indexes` is empty or any index is out of range.
    #[must_use]
    pub fn same_suit(&self, indexes: &[usize]) -> bool {
        self.same_by(indexes, Card::suit)
    }

    /// Returns whether every card in the hand has the same rank.
    #[must_use]
    pub fn all_same_rank(&self) -> bool {
        self.same_rank(&self.all_indexes())
    }

    /// Returns whether every card in the hand has the same suit.
    #[must_use]
    pub fn all_same_suit(&self) -> bool {
        self.same_suit(&self.all_indexes())
    }

    /// Returns whether no two cards share a rank.
    ///
    /// Jokers all carry rank 0, so two jokers count as a shared rank.
    #[must_use]
    pub fn no_same_ranks(&self) -> bool {
        let distinct: HashSet<u8> = self.cards.iter().map(Card::rank).collect();
        distinct.len() == self.cards.len()
    }

    /// Returns the highest rank in the hand.
    ///
    /// Jokers take part with rank 0, so they never win against a standard
    /// card. Returns `None` if the hand holds no standard card.
    #[must_use]
    pub fn highest_rank(&self) -> Option<u8> {
        if self.num_jokers() == self.size() {
            return None;
        }
        self.cards.iter().map(Card::rank).max()
    }

    /// Returns the lowest rank among the standard cards in the hand.
    ///
    /// Returns `None` if the hand holds no standard card.
    #[must_use]
    pub fn lowest_rank(&self) -> Option<u8> {
        self.cards
            .iter()
            .filter(|card| !card.is_joker())
            .map(Card::rank)
            .min()
    }

    /// Returns the first card carrying the highest rank, with its index.
    ///
    /// Unlike [`ordered`](Self::ordered), which puts jokers last, this
    /// compares numeric ranks only: a joker is never the high card. Returns
    /// `None` if the hand holds no standard card.
    #[must_use]
    pub fn high_card(&self) -> Option<IndexedCard> {
        self.highest_rank().and_then(|rank| self.first_with_rank(rank))
    }

    /// Returns a card one rank above the high card.
    ///
    /// There is no wraparound: above a King this yields rank 14, which no
    /// real card carries. Returns `None` if the hand holds no standard card.
    #[must_use]
    pub fn high_card_plus_one(&self) -> Option<Card> {
        self.highest_rank()
            .map(|rank| Card::new(Suit::ALL[0], rank.saturating_add(1)))
    }

    /// Returns the first standard card carrying the lowest rank, with its
    /// index.
    ///
    /// Returns `None` if the hand holds no standard card.
    #[must_use]
    pub fn low_card(&self) -> Option<IndexedCard> {
        self.lowest_rank().and_then(|rank| self.first_with_rank(rank))
    }

    /// Returns the rank distance between the cards at `a` and `b`.
    ///
    /// Returns `None` if either index is out of range or either card is a
    /// joker.
    #[must_use]
    pub fn value_between(&self, a: usize, b: usize) -> Option<u8> {
        let card_a = self.card_at(a)?;
        let card_b = self.card_at(b)?;
        card_a.value_between_ranks(&card_b)
    }

    fn all_indexes(&self) -> Vec<usize> {
        (0..self.cards.len()).collect()
    }

    fn indexes_where(&self, predicate: impl Fn(&Card) -> bool) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| predicate(*card))
            .map(|(index, _)| index)
            .collect()
    }

    fn same_by<T: PartialEq>(&self, indexes: &[usize], key: impl Fn(&Card) -> T) -> bool {
        let Some((&first, rest)) = indexes.split_first() else {
            return false;
        };
        let Some(expected) = self.card_at(first).map(|card| key(&card)) else {
            return false;
        };
        rest.iter()
            .all(|&index| self.card_at(index).is_some_and(|card| key(&card) == expected))
    }

    // Jokers carry rank 0, so a standard rank never matches one.
    fn first_with_rank(&self, rank: u8) -> Option<IndexedCard> {
        self.cards
            .iter()
            .copied()
            .enumerate()
            .find(|(_, card)| card.is_rank(rank))
            .map(|(index, card)| IndexedCard { index, card })
    }
}
