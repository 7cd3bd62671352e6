//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// Errors that can occur while dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than remain in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left.
        remaining: usize,
    },
}

/// Errors that can occur while classifying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// The hand did not hold exactly five cards.
    #[error("hand must contain exactly 5 cards, got {len}")]
    WrongHandSize {
        /// Number of cards supplied.
        len: usize,
    },
}

/// Errors that can occur while mutating the bankroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankrollError {
    /// The amount was zero.
    #[error("amount must be positive")]
    InvalidAmount,
    /// The balance cannot cover the amount.
    #[error("insufficient credits")]
    InsufficientCredits,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted before a deal or after a finished round.
    #[error("cannot place a bet in the {0} state")]
    InvalidState(GameState),
    /// The bet amount was zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bankroll cannot cover the bet.
    #[error("insufficient credits")]
    InsufficientCredits,
}

/// Errors that can occur when toggling a hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HoldError {
    /// Holds only apply to a freshly dealt hand.
    #[error("cannot hold cards in the {0} state")]
    InvalidState(GameState),
    /// The card index was outside the hand.
    #[error("card index {index} is out of range")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

/// Errors that can occur when drawing replacement cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Drawing only applies to a freshly dealt hand.
    #[error("cannot draw in the {0} state")]
    InvalidState(GameState),
    /// The deck could not cover the replacements.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during the double-up side game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DoubleUpError {
    /// The operation does not apply to the current state.
    #[error("cannot double up in the {0} state")]
    InvalidState(GameState),
    /// There is no win to double.
    #[error("nothing to double")]
    NothingToDouble,
    /// The picked index was not one of the four player cards.
    #[error("card index {index} is not a player card (pick 1-4)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

/// Errors that can occur when collecting winnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectError {
    /// There is nothing to collect in the current state.
    #[error("nothing to collect in the {0} state")]
    InvalidState(GameState),
}

/// Errors that can occur while building a game from explicit round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// The supplied hand does not fit the requested state.
    #[error("a hand of exactly 5 cards is required for the {0} state")]
    MissingHand(GameState),
    /// A double-up phase was requested without a pending win.
    #[error("a double-up round requires a positive last win")]
    NoPendingWin,
    /// A double-up round needs the pending win already banked.
    #[error("last win exceeds the supplied credits")]
    WinNotCovered,
}
