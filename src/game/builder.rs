//! Explicit construction of a game in a chosen round state.
//!
//! Tests and session-restoring hosts need a game mid-round (a dealt hand
//! with chosen cards, or a double-up over a known win) without replaying
//! the deals that would get there. The builder is that path: it accepts the
//! observable round state directly and validates it for consistency, so
//! nothing ever has to reach into the engine's internals.

use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::card::{Card, HAND_SIZE};
use crate::deck::Deck;
use crate::error::BuilderError;
use crate::hand::HandRank;
use crate::options::GameOptions;
use crate::variant::GameVariant;

use super::{Game, GameState};

/// Builder for a [`Game`] in an explicit round state.
///
/// # Example
///
/// ```
/// use vprs::{Card, Game, GameState, GameVariant, Rank, Suit};
///
/// let game = Game::builder(GameVariant::JacksOrBetter)
///     .credits(90)
///     .state(GameState::DoubleUp)
///     .hand(vec![
///         Card::new(Suit::Clubs, Rank::Seven),
///         Card::new(Suit::Hearts, Rank::Two),
///         Card::new(Suit::Spades, Rank::Nine),
///         Card::new(Suit::Diamonds, Rank::Queen),
///         Card::new(Suit::Clubs, Rank::Four),
///     ])
///     .last_win(10)
///     .build()
///     .unwrap();
/// assert_eq!(game.state(), GameState::DoubleUp);
/// ```
#[derive(Debug)]
pub struct GameBuilder {
    variant: GameVariant,
    options: GameOptions,
    seed: u64,
    credits: Option<u32>,
    state: GameState,
    hand: Vec<Card>,
    held: [bool; HAND_SIZE],
    current_bet: u32,
    last_win: u32,
    last_rank: HandRank,
}

impl GameBuilder {
    pub(super) fn new(variant: GameVariant) -> Self {
        Self {
            variant,
            options: GameOptions::default(),
            seed: 0,
            credits: None,
            state: GameState::WaitingForBet,
            hand: Vec::new(),
            held: [false; HAND_SIZE],
            current_bet: 0,
            last_win: 0,
            last_rank: HandRank::HighCard,
        }
    }

    /// Sets the bankroll policy options.
    #[must_use]
    pub const fn options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self
    }

    /// Seeds the deck's random source.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the credit balance, overriding the options' starting credits.
    #[must_use]
    pub const fn credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Sets the round phase to start in.
    #[must_use]
    pub const fn state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    /// Sets the current hand. Required for the dealt and double-up phases.
    #[must_use]
    pub fn hand(mut self, hand: Vec<Card>) -> Self {
        self.hand = hand;
        self
    }

    /// Sets the hold flags.
    #[must_use]
    pub const fn held(mut self, held: [bool; HAND_SIZE]) -> Self {
        self.held = held;
        self
    }

    /// Sets the bet backing the round.
    #[must_use]
    pub const fn current_bet(mut self, bet: u32) -> Self {
        self.current_bet = bet;
        self
    }

    /// Sets the pending win. A double-up phase requires it positive and
    /// already counted into the credits.
    #[must_use]
    pub const fn last_win(mut self, win: u32) -> Self {
        self.last_win = win;
        self
    }

    /// Sets the recorded category of the last scored hand.
    #[must_use]
    pub const fn last_rank(mut self, rank: HandRank) -> Self {
        self.last_rank = rank;
        self
    }

    /// Validates the requested state and builds the game.
    ///
    /// The supplied hand is withdrawn from the deck, preserving the
    /// invariant that hand plus deck always partition the 52 cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand size does not fit the requested phase,
    /// a double-up phase has no pending win, or a pending win is not covered
    /// by the supplied credits.
    pub fn build(self) -> Result<Game, BuilderError> {
        let needs_hand = matches!(self.state, GameState::Dealt | GameState::DoubleUp);
        if needs_hand && self.hand.len() != HAND_SIZE {
            return Err(BuilderError::MissingHand(self.state));
        }
        if !self.hand.is_empty() && self.hand.len() != HAND_SIZE {
            return Err(BuilderError::MissingHand(self.state));
        }

        let credits = self.credits.unwrap_or(self.options.initial_credits);

        if self.state == GameState::DoubleUp && self.last_win == 0 {
            return Err(BuilderError::NoPendingWin);
        }
        // A pending win is money already banked; a later double-up loss
        // claws it back, so the credits must cover it.
        if matches!(self.state, GameState::DoubleUp | GameState::GameOver)
            && self.last_win > credits
        {
            return Err(BuilderError::WinNotCovered);
        }

        let mut deck = Deck::new(self.seed);
        deck.shuffle();
        deck.withdraw(&self.hand);

        Ok(Game {
            variant: self.variant,
            options: self.options,
            deck,
            bankroll: Bankroll::new(credits),
            state: self.state,
            hand: self.hand,
            held: self.held,
            current_bet: self.current_bet,
            last_win: self.last_win,
            last_rank: self.last_rank,
        })
    }
}
