//! Hand classification for the base (no wild cards) draw-poker rules.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, HAND_SIZE, Rank};
use crate::error::EvaluateError;

/// Highest rank index plus one, for frequency tables indexed by rank value.
pub(crate) const RANK_TABLE: usize = 15;

/// Hand categories across all supported rule variants.
///
/// There is no global order here: each variant maps categories to payouts
/// through its own paytable, and two variants may rank the same category
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandRank {
    /// No paying combination.
    HighCard,
    /// One pair, jacks or better.
    JacksOrBetter,
    /// Two pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks, including the ace-low wheel.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Straight and flush at once.
    StraightFlush,
    /// Ten through ace, one suit, no wild cards.
    RoyalFlush,
    /// Four of a kind plus a wild card (wild variants only).
    FiveOfAKind,
    /// Ten through ace in one suit completed by wild cards.
    WildRoyalFlush,
    /// All four twos (Deuces Wild top-tier category).
    FourDeuces,
    /// Four aces, plain kicker (bonus-quad variants).
    FourAces,
    /// Four aces with a 2, 3 or 4 kicker.
    FourAcesWithKicker,
    /// Four 2s, 3s or 4s, plain kicker.
    FourTwosThreesFours,
    /// Four 2s, 3s or 4s with an ace-through-4 kicker.
    FourTwosThreesFoursWithKicker,
    /// Four 5s through kings; the kicker is irrelevant.
    FourFivesThroughKings,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::HighCard => "High Card",
            Self::JacksOrBetter => "Jacks or Better",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
            Self::FiveOfAKind => "Five of a Kind",
            Self::WildRoyalFlush => "Wild Royal Flush",
            Self::FourDeuces => "Four Deuces",
            Self::FourAces => "Four Aces",
            Self::FourAcesWithKicker => "Four Aces with Kicker",
            Self::FourTwosThreesFours => "Four 2s, 3s or 4s",
            Self::FourTwosThreesFoursWithKicker => "Four 2s, 3s or 4s with Kicker",
            Self::FourFivesThroughKings => "Four 5s through Kings",
        };
        f.write_str(s)
    }
}

/// Classifies a five-card hand under the base rules.
///
/// The checks run in strict precedence order, royal flush down to jacks or
/// better, so exactly one category applies. Classification does not depend
/// on the order of the input cards.
///
/// # Errors
///
/// Returns [`EvaluateError::WrongHandSize`] unless `hand` holds exactly five
/// cards.
///
/// # Example
///
/// ```
/// use vprs::{Card, HandRank, Rank, Suit, evaluate};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ten),
///     Card::new(Suit::Spades, Rank::Jack),
///     Card::new(Suit::Spades, Rank::Queen),
///     Card::new(Suit::Spades, Rank::King),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(evaluate(&hand), Ok(HandRank::RoyalFlush));
/// ```
pub fn evaluate(hand: &[Card]) -> Result<HandRank, EvaluateError> {
    let sorted = sorted_by_rank(hand)?;

    let flush = is_flush(&sorted);
    let straight = is_straight(&sorted);

    if flush && straight {
        // 10-J-Q-K-A is royal; the ace-low wheel is only a straight flush.
        if sorted[0].rank == Rank::Ten && sorted[4].rank == Rank::Ace {
            return Ok(HandRank::RoyalFlush);
        }
        return Ok(HandRank::StraightFlush);
    }

    let counts = rank_counts(&sorted);

    if counts.iter().any(|&n| n == 4) {
        return Ok(HandRank::FourOfAKind);
    }
    if distinct_ranks(&counts) == 2 && counts.iter().any(|&n| n == 3) {
        return Ok(HandRank::FullHouse);
    }
    if flush {
        return Ok(HandRank::Flush);
    }
    if straight {
        return Ok(HandRank::Straight);
    }
    if counts.iter().any(|&n| n == 3) {
        return Ok(HandRank::ThreeOfAKind);
    }
    if counts.iter().filter(|&&n| n == 2).count() == 2 {
        return Ok(HandRank::TwoPair);
    }
    if high_pair(&counts).is_some() {
        return Ok(HandRank::JacksOrBetter);
    }

    Ok(HandRank::HighCard)
}

/// Returns the cards that justify `rank` under the base rules.
///
/// All five cards for the categories that span the hand, the matched group
/// for grouped categories, and nothing for a high card. Ranks that only
/// exist in other variants also return nothing here.
#[must_use]
pub fn winning_cards(hand: &[Card], rank: HandRank) -> Vec<Card> {
    if hand.len() != HAND_SIZE {
        return Vec::new();
    }

    let counts = rank_counts(hand);

    match rank {
        HandRank::RoyalFlush
        | HandRank::StraightFlush
        | HandRank::Flush
        | HandRank::Straight
        | HandRank::FullHouse => hand.to_vec(),
        HandRank::FourOfAKind => cards_with_count(hand, &counts, 4),
        HandRank::ThreeOfAKind => cards_with_count(hand, &counts, 3),
        HandRank::TwoPair => cards_with_count(hand, &counts, 2),
        HandRank::JacksOrBetter => high_pair(&counts).map_or_else(Vec::new, |pair| {
            hand.iter().filter(|c| c.rank == pair).copied().collect()
        }),
        _ => Vec::new(),
    }
}

/// Sorted working copy, ascending by rank, validating the hand size.
fn sorted_by_rank(hand: &[Card]) -> Result<[Card; HAND_SIZE], EvaluateError> {
    let mut sorted: [Card; HAND_SIZE] = hand
        .try_into()
        .map_err(|_| EvaluateError::WrongHandSize { len: hand.len() })?;
    sorted.sort_unstable_by_key(|c| c.rank);
    Ok(sorted)
}

fn is_flush(hand: &[Card; HAND_SIZE]) -> bool {
    hand.iter().all(|c| c.suit == hand[0].suit)
}

/// Five consecutive ranks in the sorted hand, or the 2-3-4-5-A wheel.
fn is_straight(hand: &[Card; HAND_SIZE]) -> bool {
    let consecutive = hand
        .windows(2)
        .all(|w| w[1].rank.value() == w[0].rank.value() + 1);
    if consecutive {
        return true;
    }

    hand[0].rank == Rank::Two
        && hand[1].rank == Rank::Three
        && hand[2].rank == Rank::Four
        && hand[3].rank == Rank::Five
        && hand[4].rank == Rank::Ace
}

/// Occurrences of each rank, indexed by the rank's numeric value.
pub(crate) fn rank_counts(hand: &[Card]) -> [u8; RANK_TABLE] {
    let mut counts = [0u8; RANK_TABLE];
    for card in hand {
        counts[card.rank.value() as usize] += 1;
    }
    counts
}

fn distinct_ranks(counts: &[u8; RANK_TABLE]) -> usize {
    counts.iter().filter(|&&n| n > 0).count()
}

/// The rank of a jacks-or-better pair, if the hand holds one.
fn high_pair(counts: &[u8; RANK_TABLE]) -> Option<Rank> {
    [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
        .into_iter()
        .find(|r| counts[r.value() as usize] == 2)
}

/// All cards whose rank occurs exactly `count` times.
fn cards_with_count(hand: &[Card], counts: &[u8; RANK_TABLE], count: u8) -> Vec<Card> {
    hand.iter()
        .filter(|c| counts[c.rank.value() as usize] == count)
        .copied()
        .collect()
}
