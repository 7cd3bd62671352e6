//! Variant-specific classification and paytable tests.

use vprs::{Card, EvaluateError, GameVariant, HandRank, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand(cards: [(Suit, Rank); 5]) -> [Card; 5] {
    cards.map(|(s, r)| card(s, r))
}

#[test]
fn deuces_wild_four_deuces() {
    let h = hand([
        (Suit::Hearts, Rank::Two),
        (Suit::Diamonds, Rank::Two),
        (Suit::Clubs, Rank::Two),
        (Suit::Spades, Rank::Two),
        (Suit::Hearts, Rank::Ace),
    ]);
    let variant = GameVariant::DeucesWild;
    assert_eq!(variant.evaluate_hand(&h), Ok(HandRank::FourDeuces));

    // Only the deuces carry the win; the kicker is dead weight.
    let winning = variant.winning_cards(&h, HandRank::FourDeuces);
    assert_eq!(winning.len(), 4);
    assert!(winning.iter().all(|c| c.rank == Rank::Two));
}

#[test]
fn deuces_wild_wild_royal() {
    let h = hand([
        (Suit::Hearts, Rank::Two),
        (Suit::Hearts, Rank::Ten),
        (Suit::Hearts, Rank::Jack),
        (Suit::Hearts, Rank::Queen),
        (Suit::Hearts, Rank::King),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&h),
        Ok(HandRank::WildRoyalFlush)
    );
}

#[test]
fn deuces_wild_natural_royal_stays_natural() {
    let h = hand([
        (Suit::Spades, Rank::Ten),
        (Suit::Spades, Rank::Jack),
        (Suit::Spades, Rank::Queen),
        (Suit::Spades, Rank::King),
        (Suit::Spades, Rank::Ace),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&h),
        Ok(HandRank::RoyalFlush)
    );
}

#[test]
fn deuces_wild_three_deuces_make_quads_not_straight_flush() {
    // 5 and 6 in different suits: the deuces cannot make both a straight
    // and a flush of it.
    let h = hand([
        (Suit::Hearts, Rank::Two),
        (Suit::Diamonds, Rank::Two),
        (Suit::Clubs, Rank::Two),
        (Suit::Spades, Rank::Five),
        (Suit::Hearts, Rank::Six),
    ]);
    let variant = GameVariant::DeucesWild;
    assert_eq!(variant.evaluate_hand(&h), Ok(HandRank::FourOfAKind));

    // Three deuces plus one card of the strongest natural group.
    let winning = variant.winning_cards(&h, HandRank::FourOfAKind);
    assert_eq!(winning.len(), 4);
    assert_eq!(winning.iter().filter(|c| c.rank == Rank::Two).count(), 3);
}

#[test]
fn deuces_wild_five_of_a_kind() {
    let h = hand([
        (Suit::Hearts, Rank::Two),
        (Suit::Diamonds, Rank::Two),
        (Suit::Clubs, Rank::Nine),
        (Suit::Spades, Rank::Nine),
        (Suit::Hearts, Rank::Nine),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&h),
        Ok(HandRank::FiveOfAKind)
    );
}

#[test]
fn deuces_wild_one_deuce_two_pair_is_full_house() {
    let h = hand([
        (Suit::Clubs, Rank::Two),
        (Suit::Hearts, Rank::Ace),
        (Suit::Diamonds, Rank::Ace),
        (Suit::Spades, Rank::King),
        (Suit::Hearts, Rank::King),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&h),
        Ok(HandRank::FullHouse)
    );
}

#[test]
fn deuces_wild_straights_fill_gaps() {
    let h = hand([
        (Suit::Clubs, Rank::Two),
        (Suit::Hearts, Rank::Five),
        (Suit::Diamonds, Rank::Six),
        (Suit::Spades, Rank::Seven),
        (Suit::Hearts, Rank::Nine),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&h),
        Ok(HandRank::Straight)
    );

    // The ace plays low once the deuce covers the missing two.
    let low = hand([
        (Suit::Clubs, Rank::Two),
        (Suit::Hearts, Rank::Ace),
        (Suit::Diamonds, Rank::Three),
        (Suit::Spades, Rank::Four),
        (Suit::Hearts, Rank::Five),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&low),
        Ok(HandRank::Straight)
    );

    // A window wider than five ranks cannot be bridged.
    let wide = hand([
        (Suit::Clubs, Rank::Two),
        (Suit::Hearts, Rank::Five),
        (Suit::Diamonds, Rank::Six),
        (Suit::Spades, Rank::Seven),
        (Suit::Hearts, Rank::Ten),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&wide),
        Ok(HandRank::HighCard)
    );
}

#[test]
fn deuces_wild_wild_trips_and_winning_cards() {
    let h = hand([
        (Suit::Clubs, Rank::Two),
        (Suit::Hearts, Rank::Nine),
        (Suit::Spades, Rank::Nine),
        (Suit::Diamonds, Rank::Four),
        (Suit::Clubs, Rank::Seven),
    ]);
    let variant = GameVariant::DeucesWild;
    assert_eq!(variant.evaluate_hand(&h), Ok(HandRank::ThreeOfAKind));

    let winning = variant.winning_cards(&h, HandRank::ThreeOfAKind);
    assert_eq!(winning.len(), 3);
    assert_eq!(winning.iter().filter(|c| c.rank == Rank::Two).count(), 1);
    assert_eq!(winning.iter().filter(|c| c.rank == Rank::Nine).count(), 2);
}

#[test]
fn deuces_wild_pays_nothing_below_trips() {
    let two_pair = hand([
        (Suit::Clubs, Rank::Nine),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Four),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&two_pair),
        Ok(HandRank::HighCard)
    );

    let jacks = hand([
        (Suit::Clubs, Rank::Jack),
        (Suit::Diamonds, Rank::Jack),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Eight),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(
        GameVariant::DeucesWild.evaluate_hand(&jacks),
        Ok(HandRank::HighCard)
    );
}

#[test]
fn double_double_bonus_refines_quads_by_kicker() {
    let variant = GameVariant::DoubleDoubleBonus;

    let aces_low_kicker = hand([
        (Suit::Clubs, Rank::Ace),
        (Suit::Diamonds, Rank::Ace),
        (Suit::Hearts, Rank::Ace),
        (Suit::Spades, Rank::Ace),
        (Suit::Clubs, Rank::Two),
    ]);
    assert_eq!(
        variant.evaluate_hand(&aces_low_kicker),
        Ok(HandRank::FourAcesWithKicker)
    );
    assert_eq!(variant.payout(HandRank::FourAcesWithKicker, 1), 400);

    let aces_plain = hand([
        (Suit::Clubs, Rank::Ace),
        (Suit::Diamonds, Rank::Ace),
        (Suit::Hearts, Rank::Ace),
        (Suit::Spades, Rank::Ace),
        (Suit::Clubs, Rank::Five),
    ]);
    assert_eq!(variant.evaluate_hand(&aces_plain), Ok(HandRank::FourAces));
    assert_eq!(variant.payout(HandRank::FourAces, 1), 160);

    let threes_ace_kicker = hand([
        (Suit::Clubs, Rank::Three),
        (Suit::Diamonds, Rank::Three),
        (Suit::Hearts, Rank::Three),
        (Suit::Spades, Rank::Three),
        (Suit::Clubs, Rank::Ace),
    ]);
    assert_eq!(
        variant.evaluate_hand(&threes_ace_kicker),
        Ok(HandRank::FourTwosThreesFoursWithKicker)
    );

    let threes_plain = hand([
        (Suit::Clubs, Rank::Three),
        (Suit::Diamonds, Rank::Three),
        (Suit::Hearts, Rank::Three),
        (Suit::Spades, Rank::Three),
        (Suit::Clubs, Rank::Nine),
    ]);
    assert_eq!(
        variant.evaluate_hand(&threes_plain),
        Ok(HandRank::FourTwosThreesFours)
    );

    let nines = hand([
        (Suit::Clubs, Rank::Nine),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Hearts, Rank::Nine),
        (Suit::Spades, Rank::Nine),
        (Suit::Clubs, Rank::Ace),
    ]);
    assert_eq!(
        variant.evaluate_hand(&nines),
        Ok(HandRank::FourFivesThroughKings)
    );
}

#[test]
fn double_double_bonus_winning_cards_include_qualifying_kicker() {
    let variant = GameVariant::DoubleDoubleBonus;

    let aces_low_kicker = hand([
        (Suit::Clubs, Rank::Ace),
        (Suit::Diamonds, Rank::Ace),
        (Suit::Hearts, Rank::Ace),
        (Suit::Spades, Rank::Ace),
        (Suit::Clubs, Rank::Two),
    ]);
    assert_eq!(
        variant
            .winning_cards(&aces_low_kicker, HandRank::FourAcesWithKicker)
            .len(),
        5
    );

    let nines = hand([
        (Suit::Clubs, Rank::Nine),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Hearts, Rank::Nine),
        (Suit::Spades, Rank::Nine),
        (Suit::Clubs, Rank::Ace),
    ]);
    let winning = variant.winning_cards(&nines, HandRank::FourFivesThroughKings);
    assert_eq!(winning.len(), 4);
    assert!(winning.iter().all(|c| c.rank == Rank::Nine));
}

#[test]
fn payouts_match_the_published_paytables() {
    for variant in [
        GameVariant::JacksOrBetter,
        GameVariant::DeucesWild,
        GameVariant::DoubleDoubleBonus,
    ] {
        for row in variant.paytable() {
            for bet in 1..=5u32 {
                assert_eq!(
                    variant.payout(row.rank, bet),
                    row.payouts[(bet - 1) as usize],
                    "{} / {} at bet {bet}",
                    variant.name(),
                    row.name
                );
            }
        }
    }
}

#[test]
fn royal_jackpot_only_at_max_bet() {
    for variant in [
        GameVariant::JacksOrBetter,
        GameVariant::DeucesWild,
        GameVariant::DoubleDoubleBonus,
    ] {
        assert_eq!(variant.payout(HandRank::RoyalFlush, 1), 250);
        assert_eq!(variant.payout(HandRank::RoyalFlush, 4), 1000);
        assert_eq!(variant.payout(HandRank::RoyalFlush, 5), 4000);
        assert_eq!(variant.payout(HandRank::HighCard, 5), 0);
    }
}

#[test]
fn variant_tables_differ_where_the_rules_do() {
    assert_eq!(GameVariant::JacksOrBetter.payout(HandRank::TwoPair, 1), 2);
    assert_eq!(GameVariant::DoubleDoubleBonus.payout(HandRank::TwoPair, 1), 1);
    assert_eq!(GameVariant::DeucesWild.payout(HandRank::TwoPair, 1), 0);
    assert_eq!(GameVariant::JacksOrBetter.payout(HandRank::StraightFlush, 1), 50);
    assert_eq!(GameVariant::DeucesWild.payout(HandRank::StraightFlush, 1), 10);
    assert_eq!(GameVariant::DeucesWild.payout(HandRank::FourDeuces, 5), 1000);
}

#[test]
fn wild_predicate_is_variant_specific() {
    let deuce = card(Suit::Hearts, Rank::Two);
    let ace = card(Suit::Hearts, Rank::Ace);
    assert!(GameVariant::DeucesWild.is_wild(deuce));
    assert!(!GameVariant::DeucesWild.is_wild(ace));
    assert!(!GameVariant::JacksOrBetter.is_wild(deuce));
    assert!(!GameVariant::DoubleDoubleBonus.is_wild(deuce));
}

#[test]
fn variants_reject_wrong_hand_sizes() {
    let short = [card(Suit::Hearts, Rank::Two)];
    for variant in [
        GameVariant::JacksOrBetter,
        GameVariant::DeucesWild,
        GameVariant::DoubleDoubleBonus,
    ] {
        assert_eq!(
            variant.evaluate_hand(&short),
            Err(EvaluateError::WrongHandSize { len: 1 })
        );
    }
}
