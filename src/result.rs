//! Round result types for showdown.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::is_bust;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Dealer has the higher value.
    Lose,
    /// Push (tie).
    Push,
    /// Player went over 21, whatever the dealer holds.
    Bust,
}

impl HandOutcome {
    /// Classifies a player value against the dealer value.
    ///
    /// A player bust loses even when the dealer busts too.
    ///
    /// ```
    /// use cardtable::HandOutcome;
    ///
    /// assert_eq!(HandOutcome::resolve(19, 18), HandOutcome::Win);
    /// assert_eq!(HandOutcome::resolve(18, 18), HandOutcome::Push);
    /// assert_eq!(HandOutcome::resolve(22, 23), HandOutcome::Bust);
    /// ```
    #[must_use]
    pub const fn resolve(player_value: u16, dealer_value: u16) -> Self {
        if is_bust(player_value) {
            Self::Bust
        } else if player_value > dealer_value || is_bust(dealer_value) {
            Self::Win
        } else if player_value == dealer_value {
            Self::Push
        } else {
            Self::Lose
        }
    }

    /// Returns the short label printed next to a final hand.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "WINR",
            Self::Lose => "LOSE",
            Self::Push => "PUSH",
            Self::Bust => "BUST",
        }
    }
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's seat.
    pub seat: usize,
    /// The player's name.
    pub name: String,
    /// The player's hand value.
    pub value: u16,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each non-dealer player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
