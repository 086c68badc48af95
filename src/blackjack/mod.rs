//! Blackjack played on top of a [`Game`].
//!
//! Every player gets two cards and the dealer sits in the last seat. Players
//! hit or stay in seating order, then the dealer draws to 17 and every hand is
//! scored against the dealer's.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, GameError};
use crate::game::Game;
use crate::hand::hand_value;
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod state;

pub use actions::Hit;
pub use state::RoundState;

/// Name of the dealer's seat.
pub const DEALER_NAME: &str = "=Dealer=";

/// Cards dealt to every seat at the start of a round.
pub const STARTING_HAND: usize = 2;

/// A blackjack table: a [`Game`] with a dealer seat and round state.
#[derive(Debug, Clone)]
pub struct Blackjack {
    /// The underlying card game. The dealer is the last player.
    game: Game,
    /// Current round state.
    state: RoundState,
}

impl Blackjack {
    /// Opens a table for `players` players plus the dealer and deals the first
    /// round. `Player 1` acts first.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{Blackjack, RoundState};
    ///
    /// let table = Blackjack::new(2, 7).unwrap();
    /// assert_eq!(table.game().players().len(), 3);
    /// assert_eq!(table.state(), RoundState::PlayerTurn);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a deck error if the table is too large to deal from one deck.
    pub fn new(players: usize, seed: u64) -> Result<Self, GameError> {
        let mut names: Vec<String> = (1..=players)
            .map(|seat| format!("Player {seat}"))
            .collect();
        names.push(String::from(DEALER_NAME));

        let options = GameOptions::default()
            .with_hand_size(STARTING_HAND)
            .with_deal(false);
        let mut game = Game::with_names(names, options, seed)?;
        game.set_turn(0);

        let mut table = Self {
            game,
            state: RoundState::AwaitingDeal,
        };
        table.deal_round()?;
        Ok(table)
    }

    /// Deals a new round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless the table is awaiting a
    /// deal, or a game error if the cards run out.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::AwaitingDeal {
            return Err(ActionError::InvalidState);
        }

        self.deal_round()?;
        Ok(())
    }

    fn deal_round(&mut self) -> Result<(), GameError> {
        self.game.deal()?;
        self.state = if self.is_dealer_turn() {
            RoundState::DealerTurn
        } else {
            RoundState::PlayerTurn
        };
        debug!("round dealt, {} cards left", self.game.cards_remaining());
        Ok(())
    }

    /// Sends every hand to the discard pile and gives the turn back to
    /// `Player 1`.
    pub fn clear_round(&mut self) {
        self.game.discard_all_hands();
        self.game.set_turn(0);
        self.state = RoundState::AwaitingDeal;
    }

    /// Clears the table and deals the next round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless the round is over.
    pub fn next_round(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::RoundOver {
            return Err(ActionError::InvalidState);
        }
        self.clear_round();
        self.deal()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the underlying game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Swaps in a prepared deck and returns the previous one.
    ///
    /// Hands, the discard pile, the turn and the round state are untouched;
    /// the next card dealt or hit comes off the top of `deck`.
    pub fn replace_deck(&mut self, deck: Deck) -> Deck {
        self.game.replace_deck(deck)
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub fn dealer_seat(&self) -> usize {
        self.game.players().len() - 1
    }

    /// Returns whether the dealer holds the turn.
    #[must_use]
    pub fn is_dealer_turn(&self) -> bool {
        self.game.turn() == self.dealer_seat()
    }

    /// Returns the dealer's face-up card, the last one it received.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.game
            .hand(self.dealer_seat())
            .and_then(|hand| hand.last().copied())
    }

    /// Returns the hand value of the current turn holder.
    #[must_use]
    pub fn current_value(&self) -> u16 {
        hand_value(self.game.current_player().hand())
    }

    /// Returns the dealer's hand value.
    #[must_use]
    pub fn dealer_value(&self) -> u16 {
        self.game.hand(self.dealer_seat()).map_or(0, hand_value)
    }
}
