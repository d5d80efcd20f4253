//! Shoe and cut-card tests.

use std::collections::HashSet;

use bjsim::{CUT_CARD_RANGE, Card, DECK_SIZE, Shoe, ShoeError};

#[test]
fn single_deck_deals_every_card_once() {
    let mut shoe = Shoe::new(1, 11).unwrap();
    assert_eq!(shoe.remaining(), DECK_SIZE);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(seen.insert(shoe.draw().unwrap()));
    }
    assert_eq!(shoe.remaining(), 0);
    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::EmptyShoe);
}

#[test]
fn zero_decks_is_rejected() {
    assert_eq!(Shoe::new(0, 1).unwrap_err(), ShoeError::NoDecks);
}

#[test]
fn cut_card_is_placed_within_range() {
    for seed in 0..50 {
        let shoe = Shoe::new(6, seed).unwrap();
        assert!(CUT_CARD_RANGE.contains(&shoe.cut_card()));
        assert!(!shoe.reshuffle_due());
    }
}

#[test]
fn reshuffle_becomes_due_exactly_at_cut_card() {
    let mut shoe = Shoe::new(6, 3).unwrap();
    let cut = shoe.cut_card();

    while shoe.remaining() > cut {
        assert!(!shoe.reshuffle_due());
        shoe.draw().unwrap();
    }
    assert_eq!(shoe.remaining(), cut);
    assert!(shoe.reshuffle_due());

    // Dealing continues past the cut card until the owner reshuffles.
    shoe.draw().unwrap();
    assert!(shoe.reshuffle_due());
}

#[test]
fn reshuffle_restores_full_shoe() {
    let mut shoe = Shoe::new(2, 8).unwrap();
    while !shoe.reshuffle_due() {
        shoe.draw().unwrap();
    }

    shoe.reshuffle();
    assert_eq!(shoe.remaining(), 2 * DECK_SIZE);
    assert!(!shoe.reshuffle_due());
    assert!(CUT_CARD_RANGE.contains(&shoe.cut_card()));
    assert_eq!(shoe.decks(), 2);
}

#[test]
fn multi_deck_shoes_use_whole_cut_card_range() {
    for decks in [2, 3] {
        let cuts: HashSet<usize> = (0..200)
            .map(|seed| Shoe::new(decks, seed).unwrap().cut_card())
            .collect();
        assert!(cuts.iter().all(|cut| CUT_CARD_RANGE.contains(cut)));
        assert!(cuts.iter().all(|&cut| cut < usize::from(decks) * DECK_SIZE));
        assert!(cuts.len() > 20, "{decks} decks: {} distinct cut cards", cuts.len());
        assert!(cuts.iter().any(|&cut| cut > 78));
    }
}

#[test]
fn two_deck_shoe_reaches_high_cut_card() {
    let seed = (0..500)
        .find(|&seed| Shoe::new(2, seed).unwrap().cut_card() == 103)
        .unwrap();
    let mut shoe = Shoe::new(2, seed).unwrap();
    shoe.draw().unwrap();
    assert!(shoe.reshuffle_due());
}

#[test]
fn single_deck_cut_card_sits_at_half_deck() {
    assert_eq!(Shoe::new(1, 5).unwrap().cut_card(), DECK_SIZE / 2);

    let mut shoe = Shoe::new(1, 5).unwrap();
    for _ in 0..DECK_SIZE / 2 {
        assert!(!shoe.reshuffle_due());
        shoe.draw().unwrap();
    }
    assert!(shoe.reshuffle_due());
}

#[test]
fn same_seed_deals_same_order() {
    let mut a = Shoe::new(6, 9).unwrap();
    let mut b = Shoe::new(6, 9).unwrap();
    for _ in 0..100 {
        assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    }
    assert_eq!(a.cut_card(), b.cut_card());
}

#[test]
fn stacked_shoe_deals_in_given_order() {
    let draws: Vec<Card> = ["AH", "10S", "7D"]
        .into_iter()
        .map(|text| text.parse().unwrap())
        .collect();
    let mut shoe = Shoe::stacked(1, &draws, 0).unwrap();

    assert_eq!(shoe.remaining(), 3);
    for expected in draws {
        assert_eq!(shoe.draw().unwrap(), expected);
    }
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::EmptyShoe);

    shoe.reshuffle();
    assert_eq!(shoe.remaining(), DECK_SIZE);
}
