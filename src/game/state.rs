//! Game state types.

use core::fmt;

/// Phase of a video poker round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for a bet to start a round.
    WaitingForBet,
    /// Five cards dealt; holds may be toggled before the draw.
    Dealt,
    /// A double-up round is live; a player card must be picked.
    DoubleUp,
    /// The round is scored; double-up, collect, or a new bet may follow.
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::WaitingForBet => "waiting-for-bet",
            Self::Dealt => "dealt",
            Self::DoubleUp => "double-up",
            Self::GameOver => "game-over",
        };
        f.write_str(s)
    }
}
