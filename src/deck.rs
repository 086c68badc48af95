//! An ordered pile of cards.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered pile of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck, ordered rank-major and suit-minor
    /// (`2H 2C 2D 2S 3H ... AS`).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly the given cards, last card on top.
    ///
    /// Duplicates and counts are not checked.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates an empty pile.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Shuffles the deck `times` times.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, times: u8, rng: &mut R) {
        for _ in 0..times {
            self.cards.shuffle(rng);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn peek(&self) -> Result<Card, DeckError> {
        self.cards.last().copied().ok_or(DeckError::Empty)
    }

    /// Puts a card on top of the deck.
    pub fn put(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sorts the deck ascending by rank, then suit priority.
    pub fn sort_by_value(&mut self) {
        self.cards.sort_unstable_by_key(|card| card.sort_key());
    }

    /// Removes every card, leaving the deck empty.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a one-line count, e.g. `Deck has 52 cards.`
    #[must_use]
    pub fn summary(&self) -> String {
        alloc::format!("Deck has {} cards.", self.len())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// Writes cards separated by single spaces.
pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}
