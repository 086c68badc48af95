//! A turn-based card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a deck, a discard pile, and a
//! table of players, and moves cards between them: dealing, drawing with
//! discard recycling, turn rotation, and playing cards out of a hand. The
//! [`Blackjack`] table builds on it with hand scoring, a dealer that stands on
//! 17, and win/lose/push/bust resolution.
//!
//! # Example
//!
//! ```no_run
//! use cardtable::{Blackjack, RoundState};
//!
//! let mut table = Blackjack::new(2, 42).unwrap();
//! while table.state() == RoundState::PlayerTurn {
//!     table.stay().unwrap();
//! }
//! table.dealer_play().unwrap();
//! let result = table.showdown().unwrap();
//! let _ = result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shared;
mod sync;

// Re-export main types
pub use blackjack::{Blackjack, DEALER_NAME, Hit, RoundState};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, GameError, HandError};
pub use game::{Drawn, Game, PlayOutcome};
pub use hand::{DEALER_STAND_THRESHOLD, card_value, dealer_should_hit, hand_value};
pub use options::GameOptions;
pub use player::Player;
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use shared::SharedTable;
