//! Card types and deck utilities.

use core::fmt;

use rand::Rng;

/// Card suit.
///
/// Suits are ordered by priority: hearts lowest, spades highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in priority order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Club, Self::Diamond, Self::Spade];

    /// Returns the suit priority used as the secondary sort key.
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Returns the single-letter label of the suit.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Heart => 'H',
            Self::Club => 'C',
            Self::Diamond => 'D',
            Self::Spade => 'S',
        }
    }
}

/// Card rank, from two (lowest) to ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the position of the rank, 0 for two up to 12 for ace.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the printed label of the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

/// A playing card.
///
/// Cards compare by rank first and suit priority second, so sorting a slice of
/// cards orders it by [`Card::sort_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card with a random rank and suit.
    ///
    /// Nothing prevents the result from duplicating a card already in play.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rank = Rank::ALL[rng.random_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
        Self { rank, suit }
    }

    /// Returns the high-card ranking of the card.
    ///
    /// `rank index * 4 + suit priority`: the ace of spades is 51, the ace of
    /// hearts 48, and the two of hearts 0.
    #[must_use]
    pub const fn sort_key(self) -> u8 {
        self.rank.index() * Suit::ALL.len() as u8 + self.suit.priority()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.initial())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
