use crate::card::HAND_SIZE;
use crate::error::BetError;
use crate::hand::HandRank;

use super::{Game, GameState};

impl Game {
    /// Places a bet and deals a fresh five-card hand.
    ///
    /// Valid while waiting for a bet or after a finished round. On success
    /// the bet is debited, the deck is reset and reshuffled, five cards are
    /// dealt, holds and the previous result are cleared, and the round moves
    /// to [`GameState::Dealt`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is mid-round, the bet is zero, or the
    /// bankroll cannot cover it. Nothing changes on error.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if self.state != GameState::WaitingForBet && self.state != GameState::GameOver {
            return Err(BetError::InvalidState(self.state));
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if !self.bankroll.can_bet(amount) {
            return Err(BetError::InsufficientCredits);
        }

        self.bankroll
            .bet(amount)
            .expect("bet amount was validated against the bankroll");
        self.current_bet = amount;
        self.deal_initial_hand();

        log::debug!("bet {amount} placed, hand dealt");

        Ok(())
    }

    /// Resets and reshuffles the deck, then deals the opening hand.
    fn deal_initial_hand(&mut self) {
        self.deck.reset();
        self.deck.shuffle();
        self.hand = self
            .deck
            .deal_cards(HAND_SIZE)
            .expect("a freshly reset deck covers an opening deal");
        self.held = [false; HAND_SIZE];
        self.last_win = 0;
        self.last_rank = HandRank::HighCard;
        self.state = GameState::Dealt;
    }
}
