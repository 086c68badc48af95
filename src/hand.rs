//! Blackjack hand evaluation.

use crate::card::{Card, Rank};

/// Highest hand value that is not bust.
pub const BUST_LIMIT: u16 = 21;

/// The dealer keeps hitting while its hand is worth this much or less.
pub const DEALER_STAND_THRESHOLD: u16 = 16;

/// Returns the blackjack value of a single card, counting an ace as 11.
#[must_use]
pub const fn card_value(card: Card) -> u8 {
    match card.rank {
        Rank::Ace => 11,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        rank => rank.index() + 2,
    }
}

/// Calculates the blackjack value of a hand.
///
/// Aces count as 11. If the total goes over 21 and the hand holds an ace, one
/// ace is counted as 1 instead; further aces stay at 11. A whole deck in one
/// hand is worth 370.
///
/// ```
/// use cardtable::{Card, Rank, Suit, hand_value};
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Heart),
///     Card::new(Rank::Ace, Suit::Spade),
///     Card::new(Rank::Nine, Suit::Club),
/// ];
/// assert_eq!(hand_value(&hand), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    let mut value: u16 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.rank == Rank::Ace;
        value += u16::from(card_value(*card));
    }

    if value > BUST_LIMIT && has_ace {
        value -= 10;
    }
    value
}

/// Returns whether a hand value is bust.
#[must_use]
pub const fn is_bust(value: u16) -> bool {
    value > BUST_LIMIT
}

/// Returns whether the dealer must draw another card at `value`.
///
/// The dealer stands on 17 and above.
#[must_use]
pub const fn dealer_should_hit(value: u16) -> bool {
    value <= DEALER_STAND_THRESHOLD
}
