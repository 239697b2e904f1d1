//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when building a card from its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The code is neither the joker nor one of the 52 standard cards.
    #[error("invalid card code {0}")]
    InvalidCode(u8),
}
