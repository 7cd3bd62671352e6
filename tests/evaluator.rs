//! Base-rules hand classification tests.

use vprs::{Card, EvaluateError, HandRank, Rank, Suit, evaluate, winning_cards};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand(cards: [(Suit, Rank); 5]) -> [Card; 5] {
    cards.map(|(s, r)| card(s, r))
}

#[test]
fn royal_flush() {
    let h = hand([
        (Suit::Spades, Rank::Ten),
        (Suit::Spades, Rank::Jack),
        (Suit::Spades, Rank::Queen),
        (Suit::Spades, Rank::King),
        (Suit::Spades, Rank::Ace),
    ]);
    assert_eq!(evaluate(&h), Ok(HandRank::RoyalFlush));
}

#[test]
fn straight_flush_and_ace_low_wheel() {
    let h = hand([
        (Suit::Hearts, Rank::Nine),
        (Suit::Hearts, Rank::Ten),
        (Suit::Hearts, Rank::Jack),
        (Suit::Hearts, Rank::Queen),
        (Suit::Hearts, Rank::King),
    ]);
    assert_eq!(evaluate(&h), Ok(HandRank::StraightFlush));

    // The wheel is a straight flush, never a royal.
    let wheel = hand([
        (Suit::Clubs, Rank::Ace),
        (Suit::Clubs, Rank::Two),
        (Suit::Clubs, Rank::Three),
        (Suit::Clubs, Rank::Four),
        (Suit::Clubs, Rank::Five),
    ]);
    assert_eq!(evaluate(&wheel), Ok(HandRank::StraightFlush));
}

#[test]
fn four_of_a_kind() {
    let h = hand([
        (Suit::Clubs, Rank::Five),
        (Suit::Diamonds, Rank::Five),
        (Suit::Hearts, Rank::Five),
        (Suit::Spades, Rank::Five),
        (Suit::Clubs, Rank::Two),
    ]);
    assert_eq!(evaluate(&h), Ok(HandRank::FourOfAKind));
}

#[test]
fn full_house() {
    let h = hand([
        (Suit::Clubs, Rank::Three),
        (Suit::Diamonds, Rank::Three),
        (Suit::Hearts, Rank::Three),
        (Suit::Spades, Rank::King),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(evaluate(&h), Ok(HandRank::FullHouse));
}

#[test]
fn flush_and_straight() {
    let flush = hand([
        (Suit::Diamonds, Rank::Two),
        (Suit::Diamonds, Rank::Six),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Diamonds, Rank::Jack),
        (Suit::Diamonds, Rank::King),
    ]);
    assert_eq!(evaluate(&flush), Ok(HandRank::Flush));

    let straight = hand([
        (Suit::Clubs, Rank::Seven),
        (Suit::Diamonds, Rank::Eight),
        (Suit::Hearts, Rank::Nine),
        (Suit::Spades, Rank::Ten),
        (Suit::Clubs, Rank::Jack),
    ]);
    assert_eq!(evaluate(&straight), Ok(HandRank::Straight));

    let wheel = hand([
        (Suit::Clubs, Rank::Ace),
        (Suit::Diamonds, Rank::Two),
        (Suit::Hearts, Rank::Three),
        (Suit::Spades, Rank::Four),
        (Suit::Clubs, Rank::Five),
    ]);
    assert_eq!(evaluate(&wheel), Ok(HandRank::Straight));
}

#[test]
fn classification_ignores_card_order() {
    let scrambled = hand([
        (Suit::Clubs, Rank::Jack),
        (Suit::Spades, Rank::Ten),
        (Suit::Clubs, Rank::Seven),
        (Suit::Hearts, Rank::Nine),
        (Suit::Diamonds, Rank::Eight),
    ]);
    assert_eq!(evaluate(&scrambled), Ok(HandRank::Straight));
}

#[test]
fn three_of_a_kind_and_two_pair() {
    let trips = hand([
        (Suit::Clubs, Rank::Nine),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Hearts, Rank::Nine),
        (Suit::Spades, Rank::Four),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(evaluate(&trips), Ok(HandRank::ThreeOfAKind));

    let two_pair = hand([
        (Suit::Clubs, Rank::Nine),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Four),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(evaluate(&two_pair), Ok(HandRank::TwoPair));
}

#[test]
fn only_high_pairs_pay() {
    let jacks = hand([
        (Suit::Clubs, Rank::Jack),
        (Suit::Diamonds, Rank::Jack),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Eight),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(evaluate(&jacks), Ok(HandRank::JacksOrBetter));

    let tens = hand([
        (Suit::Clubs, Rank::Ten),
        (Suit::Diamonds, Rank::Ten),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Eight),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(evaluate(&tens), Ok(HandRank::HighCard));
}

#[test]
fn rejects_wrong_hand_size() {
    let h = hand([
        (Suit::Clubs, Rank::Jack),
        (Suit::Diamonds, Rank::Jack),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Eight),
        (Suit::Clubs, Rank::King),
    ]);
    assert_eq!(
        evaluate(&h[..4]),
        Err(EvaluateError::WrongHandSize { len: 4 })
    );
}

#[test]
fn winning_cards_select_the_justifying_group() {
    let quad = hand([
        (Suit::Clubs, Rank::Five),
        (Suit::Diamonds, Rank::Five),
        (Suit::Hearts, Rank::Five),
        (Suit::Spades, Rank::Five),
        (Suit::Clubs, Rank::Two),
    ]);
    let winning = winning_cards(&quad, HandRank::FourOfAKind);
    assert_eq!(winning.len(), 4);
    assert!(winning.iter().all(|c| c.rank == Rank::Five));

    let two_pair = hand([
        (Suit::Clubs, Rank::Nine),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Four),
        (Suit::Clubs, Rank::King),
    ]);
    let winning = winning_cards(&two_pair, HandRank::TwoPair);
    assert_eq!(winning.len(), 4);
    assert!(!winning.iter().any(|c| c.rank == Rank::King));

    let jacks = hand([
        (Suit::Clubs, Rank::Jack),
        (Suit::Diamonds, Rank::Jack),
        (Suit::Hearts, Rank::Four),
        (Suit::Spades, Rank::Eight),
        (Suit::Clubs, Rank::King),
    ]);
    let winning = winning_cards(&jacks, HandRank::JacksOrBetter);
    assert_eq!(winning.len(), 2);
    assert!(winning.iter().all(|c| c.rank == Rank::Jack));

    let flush = hand([
        (Suit::Diamonds, Rank::Two),
        (Suit::Diamonds, Rank::Six),
        (Suit::Diamonds, Rank::Nine),
        (Suit::Diamonds, Rank::Jack),
        (Suit::Diamonds, Rank::King),
    ]);
    assert_eq!(winning_cards(&flush, HandRank::Flush).len(), 5);

    let nothing = hand([
        (Suit::Clubs, Rank::Two),
        (Suit::Diamonds, Rank::Six),
        (Suit::Hearts, Rank::Nine),
        (Suit::Spades, Rank::Jack),
        (Suit::Clubs, Rank::King),
    ]);
    assert!(winning_cards(&nothing, HandRank::HighCard).is_empty());
}
