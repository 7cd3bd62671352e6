//! The double-up side game: banker card against a blind pick.

use crate::card::HAND_SIZE;
use crate::error::{CollectError, DoubleUpError};
use crate::result::DoubleUpOutcome;

use super::{Game, GameState};

/// Hand position of the banker's face-up card.
const BANKER: usize = 0;

impl Game {
    /// Starts a double-up round over the last win.
    ///
    /// Valid only after a winning round. Deals five fresh cards from a reset
    /// deck: position 0 is the banker's card, positions 1-4 are the player's
    /// face-down options.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over or there is no win to
    /// double.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn start_double_up(&mut self) -> Result<(), DoubleUpError> {
        if self.state != GameState::GameOver {
            return Err(DoubleUpError::InvalidState(self.state));
        }
        if self.last_win == 0 {
            return Err(DoubleUpError::NothingToDouble);
        }

        self.deck.reset();
        self.deck.shuffle();
        self.hand = self
            .deck
            .deal_cards(HAND_SIZE)
            .expect("a freshly reset deck covers a double-up deal");
        self.held = [false; HAND_SIZE];
        self.state = GameState::DoubleUp;

        log::debug!("double-up started over {}", self.last_win);

        Ok(())
    }

    /// Plays the double-up by picking the player card at `index` (1-4).
    ///
    /// The pick is compared against the banker card **by rank only**; suits
    /// never decide a double-up. A higher rank doubles the pending win and
    /// credits the bankroll with the added half; a lower rank claws the
    /// pending win back off the bankroll; equal ranks push, leaving both the
    /// win and the bankroll as they were. All three outcomes end in
    /// [`GameState::GameOver`], so the caller may chain another
    /// [`start_double_up`](Self::start_double_up) or [`collect`](Self::collect).
    ///
    /// # Errors
    ///
    /// Returns an error if no double-up round is live or `index` is not one
    /// of the four player cards.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn play_double_up(&mut self, index: usize) -> Result<DoubleUpOutcome, DoubleUpError> {
        if self.state != GameState::DoubleUp {
            return Err(DoubleUpError::InvalidState(self.state));
        }
        if index == BANKER || index >= HAND_SIZE {
            return Err(DoubleUpError::IndexOutOfRange { index });
        }

        let banker = self.hand[BANKER].rank;
        let player = self.hand[index].rank;
        self.state = GameState::GameOver;

        if player > banker {
            // The original win is already banked; credit the other half.
            self.bankroll.add_win(self.last_win);
            self.last_win *= 2;
            log::debug!("double-up won, win now {}", self.last_win);
            Ok(DoubleUpOutcome::Win)
        } else if player < banker {
            self.bankroll
                .bet(self.last_win)
                .expect("the pending win was credited and is still covered");
            self.last_win = 0;
            log::debug!("double-up lost");
            Ok(DoubleUpOutcome::Loss)
        } else {
            // Push: the wager survives untouched.
            log::debug!("double-up push");
            Ok(DoubleUpOutcome::Win)
        }
    }

    /// Banks the pending win and returns to waiting for a bet.
    ///
    /// The credits were already applied incrementally by
    /// [`draw`](Self::draw) and [`play_double_up`](Self::play_double_up);
    /// collecting only closes the round.
    ///
    /// # Errors
    ///
    /// Returns an error unless a round or double-up is open.
    pub fn collect(&mut self) -> Result<(), CollectError> {
        if self.state != GameState::DoubleUp && self.state != GameState::GameOver {
            return Err(CollectError::InvalidState(self.state));
        }

        self.state = GameState::WaitingForBet;
        Ok(())
    }
}
