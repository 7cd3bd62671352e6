//! Deck management: canonical ordering, shuffling, and dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single 52-card deck with its own random source.
///
/// The deck owns shuffling and dealing. Between [`reset`](Self::reset) calls
/// the remaining cards plus everything dealt always account for the full 52
/// unique cards; the deck never produces a duplicate.
///
/// Shuffling runs the `rand` crate's Fisher–Yates pass over a ChaCha20
/// stream, which samples each swap index uniformly (no modulo bias).
#[derive(Debug)]
pub struct Deck {
    /// Remaining cards, front of the vector dealt first.
    cards: Vec<Card>,
    /// Random source for shuffling.
    rng: ChaCha20Rng,
}

impl Deck {
    /// Creates a full deck in canonical order with a seeded random source.
    ///
    /// Seeded decks deal reproducibly, which is intended for tests and
    /// replays. Use [`from_entropy`](Self::from_entropy) for fair play.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Creates a full deck in canonical order seeded from OS entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    /// Rebuilds the canonical 52-card sequence, discarding any prior shuffle
    /// or deal state. The random source is unaffected.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the first `count` cards, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than `count` cards
    /// remain; the deck is left untouched in that case.
    pub fn deal_cards(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Replaces each card of `cards_to_replace` in `hand` with a fresh deal.
    ///
    /// Cards are re-located in `hand` by value equality, one at a time in the
    /// order given, so the replacement lands at the position the outgoing
    /// card currently occupies. Cards not present in `hand` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if the deck cannot cover every
    /// replacement. The check runs before any card is swapped, so `hand` is
    /// never partially mutated.
    pub fn replace_cards(
        &mut self,
        hand: &mut [Card],
        cards_to_replace: &[Card],
    ) -> Result<(), DeckError> {
        if cards_to_replace.len() > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: cards_to_replace.len(),
                remaining: self.cards.len(),
            });
        }

        for outgoing in cards_to_replace {
            if let Some(index) = hand.iter().position(|c| c == outgoing) {
                let dealt = self.deal_cards(1)?;
                hand[index] = dealt[0];
            }
        }

        Ok(())
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Drops the given cards from the remaining sequence.
    ///
    /// Used when reconstructing a round mid-flight: cards already in a hand
    /// must not stay in the deck, or a later deal could duplicate them.
    pub(crate) fn withdraw(&mut self, cards: &[Card]) {
        self.cards.retain(|c| !cards.contains(c));
    }
}

/// The canonical 52-card sequence: suits in fixed order, ranks ascending.
fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
