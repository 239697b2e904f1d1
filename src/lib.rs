//! Hand analysis for small playing-card hands with optional `no_std` support.
//!
//! The crate provides a [`HandAnalysis`] type that holds a hand of three to
//! five cards, jokers included, and answers the questions hand-ranking code
//! asks of it: canonical ordering, rank and suit equality, the position of
//! the highest and lowest cards, and rank distances for detecting runs.
//!
//! # Example
//!
//! ```
//! use hand_analysis::{Card, HandAnalysis, Suit};
//!
//! // Ace of spades, joker, two to four of diamonds.
//! let hand = HandAnalysis::from_codes(&[40, 0, 15, 16, 17]).unwrap();
//!
//! assert_eq!(hand.ordered()[0], Card::new(Suit::Spades, 1));
//! assert_eq!(hand.ordered()[4], Card::Joker);
//! assert_eq!(hand.jokers(), vec![1]);
//! assert_eq!(hand.value_between(0, 4), Some(3));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod analysis;
pub mod card;
pub mod error;

// Re-export main types
pub use analysis::{HandAnalysis, IndexedCard};
pub use card::{Card, DECK_SIZE, JOKER_CODE, Suit};
pub use error::CardError;
