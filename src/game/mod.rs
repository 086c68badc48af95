//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::Player;

mod play;

pub use play::PlayOutcome;

/// A turn-based card game: seated players, a deck, and a discard pile.
///
/// The game owns every card in play and moves cards between the deck, the
/// hands, and the discard pile. The current turn is a seat index into the
/// player list, which never changes size after construction.
#[derive(Debug, Clone)]
pub struct Game {
    /// Seated players in seating order.
    players: Vec<Player>,
    /// Seat of the current turn holder.
    turn: usize,
    /// Cards left to draw.
    deck: Deck,
    /// Cards removed from play.
    discard: Deck,
    /// Cards dealt to each player per deal.
    hand_size: usize,
    /// Shuffle passes applied after recycling.
    shuffle_passes: u8,
    /// Seat of the declared winner.
    winner: Option<usize>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

/// A card delivered by [`Game::draw_to_player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawn {
    /// The card given to the player.
    pub card: Card,
    /// Whether the discard pile had to be shuffled back into the deck first.
    pub recycled: bool,
}

impl Game {
    /// Creates a game with seats named `Player 1` to `Player N`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_players(3), 42).unwrap();
    /// assert_eq!(game.players().len(), 3);
    /// assert_eq!(game.cards_remaining(), 52 - 3 * 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayers`] for zero seats, or a deck error if the
    /// initial deal needs more cards than a single deck holds.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        let names = (1..=options.players)
            .map(|seat| format!("Player {seat}"))
            .collect();
        Self::with_names(names, options, seed)
    }

    /// Creates a game with the given seat names, ignoring `options.players`.
    ///
    /// The starting turn holder is chosen at random, then a standard deck is
    /// shuffled `options.shuffle_passes` times.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayers`] if `names` is empty, or a deck error if
    /// the initial deal runs out of cards.
    pub fn with_names(
        names: Vec<String>,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, GameError> {
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        let turn = rng.random_range(0..players.len());

        let mut deck = Deck::new();
        deck.shuffle(options.shuffle_passes, &mut rng);

        let mut game = Self {
            players,
            turn,
            deck,
            discard: Deck::empty(),
            hand_size: options.hand_size,
            shuffle_passes: options.shuffle_passes,
            winner: None,
            rng,
        };

        if options.deal {
            game.deal()?;
        }

        Ok(game)
    }

    /// Deals `hand_size` cards to every player, one card per player per pass
    /// in seating order.
    ///
    /// # Errors
    ///
    /// Returns a deck error if both the deck and the discard pile run out.
    pub fn deal(&mut self) -> Result<(), GameError> {
        debug!(
            "dealing {} cards to {} players",
            self.hand_size,
            self.players.len()
        );
        for _ in 0..self.hand_size {
            for seat in 0..self.players.len() {
                self.draw_to_player(seat)?;
            }
        }
        Ok(())
    }

    /// Draws the top card of the deck into the hand at `seat`.
    ///
    /// An empty deck is refilled from the discard pile and reshuffled first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SeatNotFound`] for an unknown seat, or a deck error
    /// if the discard pile was empty too.
    pub fn draw_to_player(&mut self, seat: usize) -> Result<Drawn, GameError> {
        if seat >= self.players.len() {
            return Err(GameError::SeatNotFound);
        }

        let recycled = self.deck.is_empty();
        if recycled {
            self.recycle_discard();
            info!(
                "deck empty, {} discarded cards shuffled in",
                self.deck.len()
            );
            self.deck.shuffle(self.shuffle_passes, &mut self.rng);
        }

        let card = self.deck.draw()?;
        trace!("{card} to {}", self.players[seat]);
        self.players[seat].draw(card);

        Ok(Drawn { card, recycled })
    }

    /// Moves every card in the discard pile onto the deck.
    pub fn recycle_discard(&mut self) {
        let cards = self.discard.take_all();
        self.deck.extend(cards);
    }

    /// Passes the turn to the next seat, wrapping after the last one.
    pub fn next_player(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
        debug!("turn passes to {}", self.players[self.turn]);
    }

    /// Puts a card on the discard pile.
    pub fn discard_card(&mut self, card: Card) {
        self.discard.put(card);
    }

    /// Moves every card from every hand to the discard pile.
    ///
    /// Each hand is emptied from its newest card to its oldest.
    pub fn discard_all_hands(&mut self) {
        for player in &mut self.players {
            let hand = player.take_hand();
            self.discard.extend(hand.into_iter().rev());
        }
    }

    /// Sorts the deck by card value.
    pub fn sort_deck(&mut self) {
        self.deck.sort_by_value();
    }

    /// Swaps in a prepared deck and returns the previous one.
    pub fn replace_deck(&mut self, deck: Deck) -> Deck {
        core::mem::replace(&mut self.deck, deck)
    }

    /// Marks the player at `seat` as the winner.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SeatNotFound`] for an unknown seat.
    pub fn declare_winner(&mut self, seat: usize) -> Result<(), GameError> {
        if seat >= self.players.len() {
            return Err(GameError::SeatNotFound);
        }
        self.winner = Some(seat);
        Ok(())
    }

    pub(crate) fn set_turn(&mut self, seat: usize) {
        self.turn = seat % self.players.len();
    }

    /// Returns the seat of the current turn holder.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the current turn holder.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Returns all players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the hand of the player at `seat`.
    #[must_use]
    pub fn hand(&self, seat: usize) -> Option<&[Card]> {
        self.players.get(seat).map(Player::hand)
    }

    /// Returns mutable access to the player at `seat`.
    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard_pile(&self) -> &Deck {
        &self.discard
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards across the deck, discard pile, and hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let held: usize = self.players.iter().map(|p| p.hand().len()).sum();
        self.deck.len() + self.discard.len() + held
    }

    /// Returns the number of cards dealt to each player.
    #[must_use]
    pub const fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Returns the seat of the declared winner.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.deck.summary())?;
        writeln!(f, "There are {} players.", self.players.len())?;
        writeln!(f, "It is {}'s turn.", self.current_player())?;
        for player in &self.players {
            writeln!(f, "{}", player.summary())?;
        }
        Ok(())
    }
}
