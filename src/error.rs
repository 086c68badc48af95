//! Error types for deck, hand, and game operations.
//!
//! Invalid card selections are not errors: they are reported through
//! [`Option`] and [`PlayOutcome`](crate::game::PlayOutcome) so callers can
//! re-prompt.

use thiserror::Error;

/// Errors raised by a [`Deck`](crate::deck::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards to draw or peek.
    #[error("deck is empty")]
    Empty,
}

/// Errors raised by a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card to discard is not held.
    #[error("card is not in hand")]
    CardNotInHand,
}

/// Errors raised while setting up or driving a [`Game`](crate::game::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game needs at least one seat.
    #[error("a game needs at least one player")]
    NoPlayers,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// The deck and the discard pile are both exhausted.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during blackjack actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The dealer plays automatically and takes no manual actions.
    #[error("it is the dealer's turn")]
    DealerTurn,
    /// The underlying game failed.
    #[error(transparent)]
    Game(#[from] GameError),
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        Self::Game(GameError::Deck(err))
    }
}
