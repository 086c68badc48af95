use alloc::string::ToString;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{dealer_should_hit, hand_value, is_bust};
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{Blackjack, RoundState};

impl Blackjack {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while its hand is worth 16 or less and stands on 17
    /// or higher. A bust ends the drawing. The round is over afterwards.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if it is not the dealer's turn, or
    /// a game error if the cards run out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let seat = self.dealer_seat();
        let mut drawn_cards = Vec::new();

        while dealer_should_hit(self.dealer_value()) {
            let drawn = self.game.draw_to_player(seat)?;
            debug!("dealer draws {}", drawn.card);
            drawn_cards.push(drawn.card);
        }

        debug!("dealer stays on {}", self.dealer_value());
        self.state = RoundState::RoundOver;

        Ok(drawn_cards)
    }

    /// Scores every player's hand against the dealer's.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the round is not over.
    pub fn showdown(&self) -> Result<RoundResult, ActionError> {
        if self.state != RoundState::RoundOver {
            return Err(ActionError::InvalidState);
        }

        let dealer_value = self.dealer_value();
        let dealer_seat = self.dealer_seat();

        let players = self
            .game
            .players()
            .iter()
            .enumerate()
            .filter(|(seat, _)| *seat != dealer_seat)
            .map(|(seat, player)| {
                let value = hand_value(player.hand());
                PlayerResult {
                    seat,
                    name: player.name().to_string(),
                    value,
                    outcome: HandOutcome::resolve(value, dealer_value),
                }
            })
            .collect();

        Ok(RoundResult {
            players,
            dealer_value,
            dealer_bust: is_bust(dealer_value),
        })
    }
}
