//! Hand valuation tests.

use bjsim::{Action, Actions, Card, Hand, HandError, Rank, Suit};

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn hand(text: &str) -> Hand {
    text.parse().unwrap()
}

#[test]
fn two_cards_without_ace_sum_face_values() {
    let hand = hand("9H 7S");
    assert_eq!(hand.total(), 16);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());
    assert!(!hand.is_blackjack());

    let legal = hand.legal_actions();
    assert!(legal.contains(Action::Stand));
    assert!(legal.contains(Action::Hit));
    assert!(legal.contains(Action::Double));
    assert!(!legal.contains(Action::Split));

    assert_eq!(Hand::pair(card("KH"), card("QS")).total(), 20);
}

#[test]
fn ace_and_king_is_blackjack() {
    let hand = hand("AH KS");
    assert!(hand.is_blackjack());
    assert!(!hand.is_soft());
    assert_eq!(hand.total(), 21);
    assert!(hand.is_finished());
}

#[test]
fn pair_of_aces_is_soft_twelve_and_demotes_once() {
    let mut hand = hand("AH AS");
    assert_eq!(hand.total(), 12);
    assert!(hand.is_soft());
    assert!(hand.can_split());

    hand.add_card(card("10C"));
    assert_eq!(hand.total(), 12);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn soft_hand_demotes_then_busts() {
    let mut hand = hand("AH 6S");
    assert_eq!(hand.total(), 17);
    assert!(hand.is_soft());

    hand.add_card(card("9D"));
    assert_eq!(hand.total(), 16);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());

    hand.add_card(card("KC"));
    assert_eq!(hand.total(), 26);
    assert!(hand.is_bust());
    assert!(hand.legal_actions().is_empty());
}

#[test]
fn three_card_twenty_one_is_not_blackjack() {
    let mut hand = hand("7H 7S");
    hand.add_card(card("7D"));
    assert_eq!(hand.total(), 21);
    assert!(!hand.is_blackjack());
    assert!(hand.is_finished());
}

#[test]
fn flags_stay_consistent_for_every_three_card_hand() {
    for first in Rank::ALL {
        for second in Rank::ALL {
            for third in Rank::ALL {
                let mut hand = Hand::pair(
                    Card::new(first, Suit::Hearts),
                    Card::new(second, Suit::Spades),
                );
                assert!(!(hand.is_bust() && hand.is_blackjack()));
                assert!(!(hand.is_soft() && hand.is_blackjack()));

                hand.add_card(Card::new(third, Suit::Clubs));
                assert!(!(hand.is_bust() && hand.is_blackjack()));
                assert!(!(hand.is_soft() && hand.is_bust()));
                assert_eq!(hand.is_bust(), hand.total() > 21);
            }
        }
    }
}

#[test]
fn hand_requires_zero_or_two_cards() {
    assert!(Hand::from_cards(&[]).unwrap().is_empty());
    assert_eq!(
        Hand::from_cards(&[card("AH")]).unwrap_err(),
        HandError::InvalidHandInit
    );
    assert_eq!(
        "AH KS 2C".parse::<Hand>().unwrap_err(),
        HandError::InvalidHandInit
    );
    assert_eq!("ZZ KS".parse::<Hand>().unwrap_err(), HandError::MalformedCard);
    assert_eq!("1H".parse::<Card>().unwrap_err(), HandError::MalformedCard);
    assert_eq!("10X".parse::<Card>().unwrap_err(), HandError::MalformedCard);
}

#[test]
fn card_text_round_trips_through_display() {
    let ten = card("10c");
    assert_eq!(ten, Card::new(Rank::Ten, Suit::Clubs));
    assert_eq!(ten.to_string(), "10C");
    assert_eq!(hand("AH KS").to_string(), "AH KS Total: 21 (BLACKJACK)");
    assert_eq!(hand("AH 6S").to_string(), "AH 6S Total: 17 (SOFT)");
}

#[test]
fn ten_valued_cards_split_into_one_card_hands() {
    let mut hand = hand("KH QS");
    assert!(hand.legal_actions().contains(Action::Split));

    let other = hand.split_off().unwrap();
    assert_eq!(hand.cards(), &[card("KH")]);
    assert_eq!(other.cards(), &[card("QS")]);
    assert_eq!(hand.total(), 10);
    assert_eq!(other.total(), 10);
}

#[test]
fn unpaired_hand_cannot_split() {
    let mut hand = hand("KH 9S");
    assert_eq!(hand.split_off().unwrap_err(), HandError::CannotSplit);
    assert_eq!(hand.len(), 2);
    assert!(!hand.legal_actions().contains(Action::Split));
}

#[test]
fn double_locks_multiplier_and_finishes_hand() {
    let mut hand = hand("5H 6S");
    hand.double_down(card("KC")).unwrap();
    assert_eq!(hand.multiplier(), 2);
    assert_eq!(hand.total(), 21);
    assert!(hand.is_finished());
    assert_eq!(
        hand.double_down(card("2C")).unwrap_err(),
        HandError::CannotDouble
    );
    assert_eq!(hand.len(), 3);

    let mut hand = self::hand("5H 3S");
    hand.add_card(card("2C"));
    assert_eq!(
        hand.double_down(card("9D")).unwrap_err(),
        HandError::CannotDouble
    );
    assert_eq!(hand.multiplier(), 1);
    assert_eq!(hand.total(), 10);
}

#[test]
fn low_double_stays_finished() {
    let mut hand = hand("2H 3S");
    hand.double_down(card("4C")).unwrap();
    assert_eq!(hand.total(), 9);
    assert!(hand.legal_actions().is_empty());
}

#[test]
fn stand_finishes_hand_once() {
    let mut hand = hand("10H 7S");
    hand.stand().unwrap();
    assert!(hand.is_finished());
    assert_eq!(hand.stand().unwrap_err(), HandError::HandOver);
}

#[test]
fn discard_recomputes_total() {
    let mut hand = hand("AH 6S");
    hand.add_card(card("9D"));
    assert_eq!(hand.discard(2), Some(card("9D")));
    assert_eq!(hand.total(), 17);
    assert!(hand.is_soft());
    assert_eq!(hand.discard(5), None);
}

#[test]
fn split_aces_restriction_allows_stand_or_resplit() {
    let mut aces = hand("AH AS");
    aces.restrict_to_stand();
    let legal = aces.legal_actions();
    assert!(legal.contains(Action::Stand));
    assert!(legal.contains(Action::Split));
    assert!(!legal.contains(Action::Hit));
    assert!(!legal.contains(Action::Double));

    assert!(aces.is_restricted());
    assert_eq!(
        legal,
        [Action::Stand, Action::Split].into_iter().collect::<Actions>()
    );

    let mut soft = hand("AH 5S");
    soft.restrict_to_stand();
    assert_eq!(soft.legal_actions().iter().collect::<Vec<_>>(), [Action::Stand]);

    // Splitting clears the restriction until the new halves are dealt.
    let other = aces.split_off().unwrap();
    assert!(!aces.is_restricted());
    assert!(!other.is_restricted());
}

#[test]
fn actions_collect_from_iterator() {
    let actions: Actions = [Action::Hit, Action::Double, Action::Hit].into_iter().collect();
    assert!(actions.contains(Action::Hit));
    assert!(actions.contains(Action::Double));
    assert!(!actions.contains(Action::Stand));
    assert_eq!(actions.iter().count(), 2);
    assert_eq!(std::iter::empty().collect::<Actions>(), Actions::NONE);
}

#[test]
fn bust_hand_keeps_taking_cards_without_overflow() {
    let mut hand = Hand::new();
    for _ in 0..30 {
        hand.add_card(card("KS"));
    }
    assert_eq!(hand.len(), 30);
    assert_eq!(hand.total(), u8::MAX);
    assert!(hand.is_bust());
    assert!(hand.legal_actions().is_empty());

    hand.add_card(card("AC"));
    assert_eq!(hand.total(), u8::MAX);
    assert!(!hand.is_soft());
}

#[test]
fn empty_hand_can_only_stand_or_hit() {
    let hand = Hand::new();
    assert_eq!(hand.total(), 0);
    assert_eq!(
        hand.legal_actions().iter().collect::<Vec<_>>(),
        [Action::Stand, Action::Hit]
    );
    assert_eq!(hand.multiplier(), 1);
}
