use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE};
use crate::error::{DrawError, HoldError};

use super::{Game, GameState};

impl Game {
    /// Flips the hold flag on the card at `index`.
    ///
    /// Valid only while a dealt hand is waiting for the draw.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is waiting for a draw or the index is
    /// outside the five hand positions.
    pub fn toggle_hold(&mut self, index: usize) -> Result<(), HoldError> {
        if self.state != GameState::Dealt {
            return Err(HoldError::InvalidState(self.state));
        }
        if index >= HAND_SIZE {
            return Err(HoldError::IndexOutOfRange { index });
        }

        self.held[index] = !self.held[index];
        Ok(())
    }

    /// Replaces every unheld card, scores the hand, and credits the payout.
    ///
    /// The resulting category and win are recorded as the round result and
    /// the round moves to [`GameState::GameOver`]. A zero payout still ends
    /// the round normally.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is waiting for a draw, or if the deck
    /// cannot cover the replacements (impossible under normal sequencing,
    /// since every deal starts from a full deck).
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn draw(&mut self) -> Result<(), DrawError> {
        if self.state != GameState::Dealt {
            return Err(DrawError::InvalidState(self.state));
        }

        let to_replace: Vec<Card> = self
            .hand
            .iter()
            .zip(self.held)
            .filter(|(_, held)| !held)
            .map(|(card, _)| *card)
            .collect();

        self.deck.replace_cards(&mut self.hand, &to_replace)?;

        let rank = self
            .variant
            .evaluate_hand(&self.hand)
            .expect("a dealt hand holds exactly five cards");
        let win = self.variant.payout(rank, self.current_bet);

        self.bankroll.add_win(win);
        self.last_rank = rank;
        self.last_win = win;
        self.state = GameState::GameOver;

        log::debug!("draw scored as {rank}, paying {win}");

        Ok(())
    }
}
