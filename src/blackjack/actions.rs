use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::is_bust;

use super::{Blackjack, RoundState};

/// A card drawn by [`Blackjack::hit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Seat that received the card.
    pub seat: usize,
    /// The card drawn.
    pub card: Card,
    /// Hand value after the draw.
    pub value: u16,
    /// Whether the hand went over 21. A bust player's turn ends automatically.
    pub bust: bool,
    /// Whether the discard pile was shuffled back in to make the draw.
    pub recycled: bool,
}

impl Blackjack {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state {
            RoundState::PlayerTurn => Ok(()),
            RoundState::DealerTurn => Err(ActionError::DealerTurn),
            RoundState::AwaitingDeal | RoundState::RoundOver => Err(ActionError::InvalidState),
        }
    }

    fn advance_turn(&mut self) {
        self.game.next_player();
        if self.is_dealer_turn() {
            self.state = RoundState::DealerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn as if they had stayed.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::DealerTurn`] while the dealer plays,
    /// [`ActionError::InvalidState`] outside of a round, or a game error if the
    /// cards run out.
    pub fn hit(&mut self) -> Result<Hit, ActionError> {
        self.ensure_player_turn()?;

        let seat = self.game.turn();
        let drawn = self.game.draw_to_player(seat)?;
        let value = self.current_value();
        let bust = is_bust(value);

        if bust {
            debug!("{} busts with {value}", self.game.current_player());
            self.advance_turn();
        }

        Ok(Hit {
            seat,
            card: drawn.card,
            value,
            bust,
            recycled: drawn.recycled,
        })
    }

    /// Player action: Stay (keep the current hand and pass the turn).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::DealerTurn`] while the dealer plays, or
    /// [`ActionError::InvalidState`] outside of a round.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        debug!(
            "{} stays on {}",
            self.game.current_player(),
            self.current_value()
        );
        self.advance_turn();
        Ok(())
    }
}
