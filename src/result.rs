//! Observable round state and double-up outcomes.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE};
use crate::game::GameState;
use crate::hand::HandRank;

/// Outcome of a double-up pick.
///
/// A push (equal ranks) reports [`Win`](Self::Win): the wager survives and
/// the player may double again or collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleUpOutcome {
    /// The player card beat (or tied) the banker card; the win stands.
    Win,
    /// The banker card won; the pending win is forfeited.
    Loss,
}

impl DoubleUpOutcome {
    /// Whether the pending win survived the pick.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// An immutable snapshot of everything a presentation layer renders.
///
/// Taken after any operation via [`Game::snapshot`](crate::Game::snapshot);
/// consumers diff successive snapshots instead of receiving change
/// notifications from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Current phase of the round.
    pub state: GameState,
    /// The current hand; empty before the first deal.
    pub hand: Vec<Card>,
    /// Which hand positions are held across the draw.
    pub held: [bool; HAND_SIZE],
    /// Current credit balance.
    pub credits: u32,
    /// The bet backing the current round.
    pub current_bet: u32,
    /// Credits won by the last scored hand (after any double-ups).
    pub last_win: u32,
    /// Category of the last scored hand.
    pub last_rank: HandRank,
}
