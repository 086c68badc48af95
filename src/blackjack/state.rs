//! Round state types.

/// Blackjack round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Hands are empty and the next deal has not happened.
    AwaitingDeal,
    /// Waiting for the current player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    RoundOver,
}
