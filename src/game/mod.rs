//! Game engine and round state management.

use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::card::{Card, HAND_SIZE};
use crate::deck::Deck;
use crate::hand::HandRank;
use crate::options::GameOptions;
use crate::result::RoundSnapshot;
use crate::variant::{GameVariant, PaytableRow};

mod actions;
mod bet;
mod builder;
mod double_up;
pub mod state;

pub use builder::GameBuilder;
pub use state::GameState;

/// A video poker engine driving one round at a time.
///
/// The game owns its deck, bankroll, and round state and runs the full
/// bet → deal → hold → draw → score flow, plus the optional double-up side
/// game. All operations are synchronous and validate before mutating; a
/// rejected operation leaves the round untouched.
///
/// One `Game` serves one session. Hosting several sessions means one `Game`
/// per session; nothing is shared between instances.
///
/// # Example
///
/// ```no_run
/// use vprs::{Game, GameOptions, GameVariant};
///
/// let options = GameOptions::default();
/// let game = Game::new(GameVariant::JacksOrBetter, options, 42);
/// let _ = game;
/// ```
#[derive(Debug)]
pub struct Game {
    /// Active rule variant.
    variant: GameVariant,
    /// Bankroll policy options.
    options: GameOptions,
    /// The deck, reset and reshuffled for every deal.
    deck: Deck,
    /// The player's credits.
    bankroll: Bankroll,
    /// Current phase.
    state: GameState,
    /// Current five-card hand; empty before the first deal.
    hand: Vec<Card>,
    /// Hold flags, one per hand position.
    held: [bool; HAND_SIZE],
    /// The bet backing the current round.
    current_bet: u32,
    /// Credits won by the last scored hand.
    last_win: u32,
    /// Category of the last scored hand.
    last_rank: HandRank,
}

impl Game {
    /// Creates a new game with a seeded deck.
    ///
    /// Seeded games deal reproducibly, which is intended for tests and
    /// replays; use [`from_entropy`](Self::from_entropy) for fair play.
    #[must_use]
    pub fn new(variant: GameVariant, options: GameOptions, seed: u64) -> Self {
        Self::with_deck(variant, options, Deck::new(seed))
    }

    /// Creates a new game with a deck seeded from OS entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(variant: GameVariant, options: GameOptions) -> Self {
        Self::with_deck(variant, options, Deck::from_entropy())
    }

    /// Starts a builder for constructing a game in an explicit round state.
    #[must_use]
    pub fn builder(variant: GameVariant) -> GameBuilder {
        GameBuilder::new(variant)
    }

    fn with_deck(variant: GameVariant, options: GameOptions, deck: Deck) -> Self {
        Self {
            variant,
            options,
            deck,
            bankroll: Bankroll::new(options.initial_credits),
            state: GameState::WaitingForBet,
            hand: Vec::new(),
            held: [false; HAND_SIZE],
            current_bet: 0,
            last_win: 0,
            last_rank: HandRank::HighCard,
        }
    }

    /// Abandons the current round and returns to waiting for a bet.
    ///
    /// Clears the hand and holds unconditionally. A busted bankroll is
    /// topped up by [`GameOptions::bust_top_up`] so play can continue.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the deposit cannot fail for a positive top-up"
    )]
    pub fn reset(&mut self) {
        self.hand.clear();
        self.held = [false; HAND_SIZE];
        self.state = GameState::WaitingForBet;

        if self.bankroll.credits() == 0 && self.options.bust_top_up > 0 {
            self.bankroll
                .deposit(self.options.bust_top_up)
                .expect("top-up amount is checked positive");
            log::info!("bankroll busted, topped up {} credits", self.options.bust_top_up);
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current credit balance.
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.bankroll.credits()
    }

    /// Returns the current hand; empty before the first deal.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the hold flags, one per hand position.
    #[must_use]
    pub const fn held(&self) -> [bool; HAND_SIZE] {
        self.held
    }

    /// Returns the bet backing the current round.
    #[must_use]
    pub const fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Returns the credits won by the last scored hand.
    #[must_use]
    pub const fn last_win(&self) -> u32 {
        self.last_win
    }

    /// Returns the category of the last scored hand.
    #[must_use]
    pub const fn last_hand_rank(&self) -> HandRank {
        self.last_rank
    }

    /// Returns the active rule variant.
    #[must_use]
    pub const fn variant(&self) -> GameVariant {
        self.variant
    }

    /// Returns the active variant's paytable.
    #[must_use]
    pub fn paytable(&self) -> &'static [PaytableRow] {
        self.variant.paytable()
    }

    /// Whether `card` is wild under the active variant.
    #[must_use]
    pub const fn is_card_wild(&self, card: Card) -> bool {
        self.variant.is_wild(card)
    }

    /// Returns the cards of the current hand that justify `rank`.
    #[must_use]
    pub fn winning_cards(&self, rank: HandRank) -> Vec<Card> {
        self.variant.winning_cards(&self.hand, rank)
    }

    /// Takes an immutable snapshot of the observable round state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            hand: self.hand.clone(),
            held: self.held,
            credits: self.bankroll.credits(),
            current_bet: self.current_bet,
            last_win: self.last_win,
            last_rank: self.last_rank,
        }
    }
}
