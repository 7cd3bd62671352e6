//! Rule variants: classification, wild cards, and paytables.
//!
//! Each variant bundles its own hand classification, winning-card selection,
//! wild-card predicate, and a fixed paytable. The set is closed (variants
//! are data plus a dispatch, not an open trait) so the engine can stay a
//! plain value type.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, HAND_SIZE, Rank};
use crate::error::EvaluateError;
use crate::hand::{self, HandRank, RANK_TABLE, rank_counts};

/// One paytable line: display name, category, and the payouts for bets 1-5.
///
/// The bet-5 column is not a linear extrapolation for the top-tier category;
/// the royal flush jackpot only pays at max bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaytableRow {
    /// Name as shown on the machine glass.
    pub name: &'static str,
    /// The category this row pays.
    pub rank: HandRank,
    /// Credits awarded for bets of 1 through 5 units.
    pub payouts: [u32; 5],
}

/// Standard 9/6 Jacks or Better.
static JACKS_OR_BETTER: [PaytableRow; 9] = [
    row("Royal Flush", HandRank::RoyalFlush, [250, 500, 750, 1000, 4000]),
    row("Straight Flush", HandRank::StraightFlush, [50, 100, 150, 200, 250]),
    row("4 of a Kind", HandRank::FourOfAKind, [25, 50, 75, 100, 125]),
    row("Full House", HandRank::FullHouse, [9, 18, 27, 36, 45]),
    row("Flush", HandRank::Flush, [6, 12, 18, 24, 30]),
    row("Straight", HandRank::Straight, [4, 8, 12, 16, 20]),
    row("3 of a Kind", HandRank::ThreeOfAKind, [3, 6, 9, 12, 15]),
    row("Two Pair", HandRank::TwoPair, [2, 4, 6, 8, 10]),
    row("Jacks or Better", HandRank::JacksOrBetter, [1, 2, 3, 4, 5]),
];

/// "Not So Ugly Ducks" Deuces Wild.
static DEUCES_WILD: [PaytableRow; 10] = [
    row("Natural Royal Flush", HandRank::RoyalFlush, [250, 500, 750, 1000, 4000]),
    row("Four Deuces", HandRank::FourDeuces, [200, 400, 600, 800, 1000]),
    row("Wild Royal Flush", HandRank::WildRoyalFlush, [25, 50, 75, 100, 125]),
    row("Five of a Kind", HandRank::FiveOfAKind, [16, 32, 48, 64, 80]),
    row("Straight Flush", HandRank::StraightFlush, [10, 20, 30, 40, 50]),
    row("Four of a Kind", HandRank::FourOfAKind, [4, 8, 12, 16, 20]),
    row("Full House", HandRank::FullHouse, [4, 8, 12, 16, 20]),
    row("Flush", HandRank::Flush, [3, 6, 9, 12, 15]),
    row("Straight", HandRank::Straight, [2, 4, 6, 8, 10]),
    row("Three of a Kind", HandRank::ThreeOfAKind, [1, 2, 3, 4, 5]),
];

/// Standard 9/6 Double Double Bonus.
static DOUBLE_DOUBLE_BONUS: [PaytableRow; 13] = [
    row("Royal Flush", HandRank::RoyalFlush, [250, 500, 750, 1000, 4000]),
    row("Straight Flush", HandRank::StraightFlush, [50, 100, 150, 200, 250]),
    row("4 Aces w/ 2,3,4", HandRank::FourAcesWithKicker, [400, 800, 1200, 1600, 2000]),
    row("4 Aces", HandRank::FourAces, [160, 320, 480, 640, 800]),
    row("4 2s,3s,4s w/ A-4", HandRank::FourTwosThreesFoursWithKicker, [160, 320, 480, 640, 800]),
    row("4 2s,3s,4s", HandRank::FourTwosThreesFours, [80, 160, 240, 320, 400]),
    row("4 5s thru Kings", HandRank::FourFivesThroughKings, [50, 100, 150, 200, 250]),
    row("Full House", HandRank::FullHouse, [9, 18, 27, 36, 45]),
    row("Flush", HandRank::Flush, [6, 12, 18, 24, 30]),
    row("Straight", HandRank::Straight, [4, 8, 12, 16, 20]),
    row("3 of a Kind", HandRank::ThreeOfAKind, [3, 6, 9, 12, 15]),
    row("Two Pair", HandRank::TwoPair, [1, 2, 3, 4, 5]),
    row("Jacks or Better", HandRank::JacksOrBetter, [1, 2, 3, 4, 5]),
];

const fn row(name: &'static str, rank: HandRank, payouts: [u32; 5]) -> PaytableRow {
    PaytableRow { name, rank, payouts }
}

/// A video poker rule variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameVariant {
    /// Standard draw poker, pairs of jacks or better pay.
    #[default]
    JacksOrBetter,
    /// Every two is wild; nothing below three of a kind pays.
    DeucesWild,
    /// Jacks or Better with four-of-a-kind bonuses split by kicker.
    DoubleDoubleBonus,
}

impl GameVariant {
    /// The variant's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JacksOrBetter => "Jacks or Better",
            Self::DeucesWild => "Deuces Wild",
            Self::DoubleDoubleBonus => "Double Double Bonus",
        }
    }

    /// Classifies a five-card hand under this variant's rules.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::WrongHandSize`] unless `hand` holds exactly
    /// five cards.
    pub fn evaluate_hand(self, hand: &[Card]) -> Result<HandRank, EvaluateError> {
        match self {
            Self::JacksOrBetter => hand::evaluate(hand),
            Self::DeucesWild => evaluate_deuces_wild(hand),
            Self::DoubleDoubleBonus => {
                let base = hand::evaluate(hand)?;
                if base == HandRank::FourOfAKind {
                    Ok(refine_four_of_a_kind(hand))
                } else {
                    Ok(base)
                }
            }
        }
    }

    /// Credits paid for `rank` at a bet of `bet` units.
    ///
    /// Pure lookup; the royal flush pays its jackpot only at a bet of 5.
    ///
    /// # Example
    ///
    /// ```
    /// use vprs::{GameVariant, HandRank};
    ///
    /// let variant = GameVariant::JacksOrBetter;
    /// assert_eq!(variant.payout(HandRank::RoyalFlush, 1), 250);
    /// assert_eq!(variant.payout(HandRank::RoyalFlush, 5), 4000);
    /// assert_eq!(variant.payout(HandRank::HighCard, 5), 0);
    /// ```
    #[must_use]
    pub const fn payout(self, rank: HandRank, bet: u32) -> u32 {
        if matches!(rank, HandRank::RoyalFlush) {
            if bet == 5 {
                return 4000;
            }
            return 250 * bet;
        }

        let multiplier = match self {
            Self::JacksOrBetter => match rank {
                HandRank::StraightFlush => 50,
                HandRank::FourOfAKind => 25,
                HandRank::FullHouse => 9,
                HandRank::Flush => 6,
                HandRank::Straight => 4,
                HandRank::ThreeOfAKind => 3,
                HandRank::TwoPair => 2,
                HandRank::JacksOrBetter => 1,
                _ => 0,
            },
            Self::DeucesWild => match rank {
                HandRank::FourDeuces => 200,
                HandRank::WildRoyalFlush => 25,
                HandRank::FiveOfAKind => 16,
                HandRank::StraightFlush => 10,
                HandRank::FourOfAKind | HandRank::FullHouse => 4,
                HandRank::Flush => 3,
                HandRank::Straight => 2,
                HandRank::ThreeOfAKind => 1,
                _ => 0,
            },
            Self::DoubleDoubleBonus => match rank {
                HandRank::FourAcesWithKicker => 400,
                HandRank::FourAces | HandRank::FourTwosThreesFoursWithKicker => 160,
                HandRank::FourTwosThreesFours => 80,
                HandRank::StraightFlush | HandRank::FourFivesThroughKings => 50,
                HandRank::FullHouse => 9,
                HandRank::Flush => 6,
                HandRank::Straight => 4,
                HandRank::ThreeOfAKind => 3,
                HandRank::TwoPair | HandRank::JacksOrBetter => 1,
                _ => 0,
            },
        };

        multiplier * bet
    }

    /// Returns the cards that justify `rank` under this variant's rules.
    #[must_use]
    pub fn winning_cards(self, hand: &[Card], rank: HandRank) -> Vec<Card> {
        match self {
            Self::JacksOrBetter => hand::winning_cards(hand, rank),
            Self::DeucesWild => winning_cards_deuces_wild(hand, rank),
            Self::DoubleDoubleBonus => match rank {
                // The qualifying kicker is part of the win.
                HandRank::FourAcesWithKicker | HandRank::FourTwosThreesFoursWithKicker => {
                    hand.to_vec()
                }
                HandRank::FourAces
                | HandRank::FourTwosThreesFours
                | HandRank::FourFivesThroughKings => {
                    let counts = rank_counts(hand);
                    hand.iter()
                        .filter(|c| counts[c.rank.value() as usize] == 4)
                        .copied()
                        .collect()
                }
                _ => hand::winning_cards(hand, rank),
            },
        }
    }

    /// Whether `card` substitutes for any rank and suit in this variant.
    #[must_use]
    pub const fn is_wild(self, card: Card) -> bool {
        match self {
            Self::DeucesWild => matches!(card.rank, Rank::Two),
            Self::JacksOrBetter | Self::DoubleDoubleBonus => false,
        }
    }

    /// The variant's paytable, highest-paying row first.
    #[must_use]
    pub fn paytable(self) -> &'static [PaytableRow] {
        match self {
            Self::JacksOrBetter => &JACKS_OR_BETTER,
            Self::DeucesWild => &DEUCES_WILD,
            Self::DoubleDoubleBonus => &DOUBLE_DOUBLE_BONUS,
        }
    }
}

/// Deuces Wild classification.
///
/// Categories are tried in strict descending value order once the trivial
/// cases (four deuces, no deuces) are out of the way, so the first match is
/// the best the hand can make.
fn evaluate_deuces_wild(hand: &[Card]) -> Result<HandRank, EvaluateError> {
    if hand.len() != HAND_SIZE {
        return Err(EvaluateError::WrongHandSize { len: hand.len() });
    }

    let deuces = hand.iter().filter(|c| c.rank == Rank::Two).count();
    let non_deuces: Vec<Card> = hand.iter().filter(|c| c.rank != Rank::Two).copied().collect();

    if deuces == 4 {
        return Ok(HandRank::FourDeuces);
    }

    if deuces == 0 {
        // Natural hands classify normally, but this variant pays nothing
        // below three of a kind.
        return Ok(match hand::evaluate(hand)? {
            HandRank::JacksOrBetter | HandRank::TwoPair | HandRank::HighCard => HandRank::HighCard,
            natural => natural,
        });
    }

    if non_deuces.iter().all(|c| c.rank == non_deuces[0].rank) {
        return Ok(HandRank::FiveOfAKind);
    }
    if is_wild_royal_flush(&non_deuces) {
        return Ok(HandRank::WildRoyalFlush);
    }
    if same_suit(&non_deuces) && is_wild_straight(&non_deuces) {
        return Ok(HandRank::StraightFlush);
    }
    if max_rank_count(&non_deuces) + deuces >= 4 {
        return Ok(HandRank::FourOfAKind);
    }
    if is_wild_full_house(&non_deuces, deuces) {
        return Ok(HandRank::FullHouse);
    }
    if same_suit(&non_deuces) {
        return Ok(HandRank::Flush);
    }
    if is_wild_straight(&non_deuces) {
        return Ok(HandRank::Straight);
    }
    if max_rank_count(&non_deuces) + deuces >= 3 {
        return Ok(HandRank::ThreeOfAKind);
    }

    Ok(HandRank::HighCard)
}

fn same_suit(cards: &[Card]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

/// Ten-or-higher distinct ranks in one suit; deuces fill the rest.
fn is_wild_royal_flush(non_deuces: &[Card]) -> bool {
    same_suit(non_deuces)
        && non_deuces.iter().all(|c| c.rank >= Rank::Ten)
        && distinct_ranks(non_deuces)
}

/// A straight completable by the deuces on hand.
///
/// With distinct non-deuce ranks, a window of `max - min < 5` is sufficient:
/// the hand holds five cards total, so the gaps inside the window are exactly
/// the deuces present. The ace is tried high and, if present, low.
fn is_wild_straight(non_deuces: &[Card]) -> bool {
    if !distinct_ranks(non_deuces) {
        return false;
    }

    let values: Vec<u8> = non_deuces.iter().map(|c| c.rank.value()).collect();
    if window_fits(&values) {
        return true;
    }

    if values.contains(&14) {
        let low_ace: Vec<u8> = values.iter().map(|&v| if v == 14 { 1 } else { v }).collect();
        return window_fits(&low_ace);
    }

    false
}

fn window_fits(values: &[u8]) -> bool {
    let min = values.iter().min().copied().unwrap_or(0);
    let max = values.iter().max().copied().unwrap_or(0);
    max - min < 5
}

/// Exactly one deuce completing two natural pairs. Every other wild shape
/// that could fill a full house already resolved to a higher category.
fn is_wild_full_house(non_deuces: &[Card], deuces: usize) -> bool {
    if deuces != 1 {
        return false;
    }
    let counts = rank_counts(non_deuces);
    counts.iter().filter(|&&n| n == 2).count() == 2
}

fn distinct_ranks(cards: &[Card]) -> bool {
    let counts = rank_counts(cards);
    counts.iter().all(|&n| n <= 1)
}

fn max_rank_count(non_deuces: &[Card]) -> usize {
    let counts = rank_counts(non_deuces);
    counts.iter().map(|&n| n as usize).max().unwrap_or(0)
}

/// The non-deuce rank carrying the largest group, first occurrence winning
/// ties, so selection is deterministic in hand order.
fn best_group_rank(non_deuces: &[Card]) -> Option<Rank> {
    let counts = rank_counts(non_deuces);
    let mut best: Option<Rank> = None;
    for card in non_deuces {
        match best {
            Some(rank) if counts[card.rank.value() as usize] <= counts[rank.value() as usize] => {}
            _ => best = Some(card.rank),
        }
    }
    best
}

fn winning_cards_deuces_wild(hand: &[Card], rank: HandRank) -> Vec<Card> {
    if hand.len() != HAND_SIZE || rank == HandRank::HighCard {
        return Vec::new();
    }

    let deuces: Vec<Card> = hand.iter().filter(|c| c.rank == Rank::Two).copied().collect();
    let non_deuces: Vec<Card> = hand.iter().filter(|c| c.rank != Rank::Two).copied().collect();

    match rank {
        // The kicker beside four deuces is dead weight; highlight the deuces.
        HandRank::FourDeuces => deuces,
        HandRank::Straight
        | HandRank::Flush
        | HandRank::FullHouse
        | HandRank::StraightFlush
        | HandRank::WildRoyalFlush
        | HandRank::RoyalFlush
        | HandRank::FiveOfAKind => hand.to_vec(),
        HandRank::FourOfAKind => group_with_deuces(&deuces, &non_deuces, 4),
        HandRank::ThreeOfAKind => group_with_deuces(&deuces, &non_deuces, 3),
        _ => hand.to_vec(),
    }
}

/// Deuces plus just enough cards of the strongest natural group to complete
/// a group of `size`.
fn group_with_deuces(deuces: &[Card], non_deuces: &[Card], size: usize) -> Vec<Card> {
    let Some(rank) = best_group_rank(non_deuces) else {
        return Vec::new();
    };
    let needed = size.saturating_sub(deuces.len());
    let mut winning = deuces.to_vec();
    winning.extend(non_deuces.iter().filter(|c| c.rank == rank).take(needed));
    winning
}

/// Splits a natural four of a kind into the bonus sub-categories by quad
/// rank and kicker rank.
fn refine_four_of_a_kind(hand: &[Card]) -> HandRank {
    let counts = rank_counts(hand);
    let quad = rank_with_count(&counts, 4);
    let kicker = rank_with_count(&counts, 1);

    let low_kicker = matches!(kicker, Rank::Two | Rank::Three | Rank::Four);

    match quad {
        Rank::Ace => {
            if low_kicker {
                HandRank::FourAcesWithKicker
            } else {
                HandRank::FourAces
            }
        }
        Rank::Two | Rank::Three | Rank::Four => {
            if low_kicker || kicker == Rank::Ace {
                HandRank::FourTwosThreesFoursWithKicker
            } else {
                HandRank::FourTwosThreesFours
            }
        }
        _ => HandRank::FourFivesThroughKings,
    }
}

/// The rank occurring exactly `count` times. Only called on hands already
/// classified as four of a kind, where both groups exist.
fn rank_with_count(counts: &[u8; RANK_TABLE], count: u8) -> Rank {
    for rank in Rank::ALL {
        if counts[rank.value() as usize] == count {
            return rank;
        }
    }
    // Unreachable for a classified four of a kind; twos are a harmless
    // stand-in for the impossible case.
    Rank::Two
}
