//! Players and their hands.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;

/// A seated player holding a hand of cards in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand, oldest first.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Takes a card into the hand.
    pub fn draw(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Forces a chosen card into the hand.
    ///
    /// This bypasses the deck entirely, so the card is not accounted for by
    /// the game's piles.
    pub fn cheat(&mut self, card: Card) {
        self.draw(card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// Returns `None` when the index is outside the hand, leaving the hand
    /// untouched; the caller should ask for another selection.
    pub fn play_at(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Removes the first card equal to `card` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotInHand`] if no such card is held.
    pub fn discard(&mut self, card: Card) -> Result<Card, HandError> {
        let index = self
            .hand
            .iter()
            .position(|held| *held == card)
            .ok_or(HandError::CardNotInHand)?;
        Ok(self.hand.remove(index))
    }

    /// Empties the hand, returning its cards in arrival order.
    pub fn take_hand(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.hand)
    }

    /// Returns the held cards separated by spaces.
    #[must_use]
    pub fn describe_hand(&self) -> String {
        self.hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns a one-line count, e.g. `Player 1 has 5 cards.`
    #[must_use]
    pub fn summary(&self) -> String {
        alloc::format!("{} has {} cards.", self.name, self.hand.len())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
