//! A video poker game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow,
//! including betting, dealing, holding, drawing, scoring, and the double-up
//! side game, under a pluggable rule [`GameVariant`] with its own fixed
//! paytable.
//!
//! # Example
//!
//! ```no_run
//! use vprs::{Game, GameOptions, GameVariant};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(GameVariant::JacksOrBetter, options, 42);
//! game.place_bet(5).unwrap();
//! game.toggle_hold(0).unwrap();
//! game.draw().unwrap();
//! println!("{}: {} credits", game.last_hand_rank(), game.last_win());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod variant;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    BankrollError, BetError, BuilderError, CollectError, DeckError, DoubleUpError, DrawError,
    EvaluateError, HoldError,
};
pub use game::{Game, GameBuilder, GameState};
pub use hand::{HandRank, evaluate, winning_cards};
pub use options::GameOptions;
pub use result::{DoubleUpOutcome, RoundSnapshot};
pub use variant::{GameVariant, PaytableRow};
