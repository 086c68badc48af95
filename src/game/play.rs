use crate::card::Card;

use super::Game;

/// Result of [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was played and discarded.
    Played(Card),
    /// The selection was out of range; nothing changed.
    TryAgain,
}

impl Game {
    /// The current turn holder plays the card at `index` of their hand.
    ///
    /// A valid play passes the turn and sends the card to the discard pile.
    /// An out-of-range index leaves the turn, the hand, and every pile as
    /// they were.
    pub fn play(&mut self, index: usize) -> PlayOutcome {
        let Some(card) = self.players[self.turn].play_at(index) else {
            return PlayOutcome::TryAgain;
        };

        self.next_player();
        self.discard_card(card);
        PlayOutcome::Played(card)
    }
}
