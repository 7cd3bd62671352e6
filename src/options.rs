//! Game configuration options.

/// Configuration options for a video poker game.
///
/// Paytables are fixed per variant and not configurable; the options cover
/// the bankroll policy around them.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use vprs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_credits(500)
///     .with_bust_top_up(50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Credits the bankroll starts with.
    pub initial_credits: u32,
    /// Credits deposited by [`reset`](crate::Game::reset) when the bankroll
    /// is empty, so play can continue. 0 disables the top-up.
    pub bust_top_up: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_credits: 100,
            bust_top_up: 100,
        }
    }
}

impl GameOptions {
    /// Sets the starting credits.
    ///
    /// # Example
    ///
    /// ```
    /// use vprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_credits(250);
    /// assert_eq!(options.initial_credits, 250);
    /// ```
    #[must_use]
    pub const fn with_initial_credits(mut self, credits: u32) -> Self {
        self.initial_credits = credits;
        self
    }

    /// Sets the bust top-up amount.
    ///
    /// # Example
    ///
    /// ```
    /// use vprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_bust_top_up(0);
    /// assert_eq!(options.bust_top_up, 0);
    /// ```
    #[must_use]
    pub const fn with_bust_top_up(mut self, credits: u32) -> Self {
        self.bust_top_up = credits;
        self
    }
}
