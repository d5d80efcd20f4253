//! Bankroll, bet, and rebuy tests.

#![allow(clippy::float_cmp)]

use bjsim::{Action, BetProgression, Increment, Position, PositionError};

#[test]
fn new_position_validates_limits() {
    assert_eq!(
        Position::new(5.0, 10.0, 1000.0).unwrap_err(),
        PositionError::InsufficientBankroll
    );
    assert_eq!(
        Position::new(100.0, 10.0, 5.0).unwrap_err(),
        PositionError::BetOutOfRange
    );
    assert_eq!(
        Position::new(100.0, 0.5, 5.0).unwrap_err(),
        PositionError::BetOutOfRange
    );

    let position = Position::new(100.0, 10.0, 1000.0).unwrap();
    assert_eq!(position.bet(), 10.0);
    assert_eq!(position.hands().len(), 1);
    assert!(position.hand(0).unwrap().is_empty());
}

#[test]
fn set_bet_keeps_previous_bet_when_out_of_range() {
    let mut position = Position::new(100.0, 10.0, 50.0).unwrap();
    assert_eq!(position.set_bet(5.0), Err(PositionError::BetOutOfRange));
    assert_eq!(position.set_bet(60.0), Err(PositionError::BetOutOfRange));
    assert_eq!(position.bet(), 10.0);

    position.set_bet(50.0).unwrap();
    assert_eq!(position.bet(), 50.0);
}

#[test]
fn win_adds_to_bankroll_and_winnings() {
    let mut position = Position::new(100.0, 10.0, 1000.0).unwrap();
    position.record_win(10.0);

    let stats = position.stats();
    assert_eq!(stats.bankroll, 110.0);
    assert_eq!(stats.bet, 10.0);
    assert_eq!(stats.winnings, 10.0);
    assert_eq!(stats.max_winnings, 10.0);
    assert_eq!(stats.wins, 1);
}

#[test]
fn losing_below_minimum_rebuys() {
    let mut position = Position::new(20.0, 10.0, 1000.0).unwrap();

    position.record_lose(10.0);
    assert_eq!(position.bankroll(), 10.0);

    position.record_lose(10.0);
    assert_eq!(position.bankroll(), 100.0);
    assert_eq!(position.winnings(), -20.0);

    let stats = position.stats();
    assert_eq!(stats.min_winnings, -20.0);
    assert_eq!(stats.losses, 2);
    assert_eq!(stats.max_lose_streak, 2);
}

#[test]
fn rebuy_amount_is_configurable() {
    let mut position = Position::new(10.0, 10.0, 1000.0)
        .unwrap()
        .with_rebuy_amount(50.0);
    position.record_lose(10.0);
    assert_eq!(position.bankroll(), 50.0);
    assert_eq!(position.winnings(), -10.0);
}

#[test]
fn manual_rebuy_is_validated() {
    let mut position = Position::new(10.0, 10.0, 1000.0).unwrap();
    assert_eq!(position.rebuy(-5.0), Err(PositionError::InsufficientBankroll));
    assert_eq!(position.rebuy(0.0), Err(PositionError::InsufficientBankroll));

    position.rebuy(40.0).unwrap();
    assert_eq!(position.bankroll(), 50.0);
    assert_eq!(position.winnings(), 0.0);
}

#[test]
fn progression_sets_next_bet_in_units() {
    let progression =
        BetProgression::new(1.5, Increment::Add(0.5), 1.0, Increment::Add(0.0), 100.0).unwrap();
    let mut position = Position::new(1000.0, 10.0, 1000.0)
        .unwrap()
        .with_progression(progression);

    position.record_win(10.0);
    assert_eq!(position.bet(), 15.0);
    position.record_win(15.0);
    assert_eq!(position.bet(), 20.0);
    position.record_lose(20.0);
    assert_eq!(position.bet(), 10.0);
}

#[test]
fn bet_never_exceeds_bankroll() {
    let progression =
        BetProgression::new(1.0, Increment::Add(0.0), 3.0, Increment::Add(0.0), 100.0).unwrap();
    let mut position = Position::new(30.0, 10.0, 1000.0)
        .unwrap()
        .with_progression(progression);

    position.record_lose(10.0);
    assert_eq!(position.bankroll(), 20.0);
    assert_eq!(position.bet(), 20.0);
}

#[test]
fn bet_never_exceeds_table_maximum() {
    let progression =
        BetProgression::new(1.0, Increment::Multiply(10.0), 1.0, Increment::Add(0.0), 1000.0)
            .unwrap();
    let mut position = Position::new(10_000.0, 10.0, 50.0)
        .unwrap()
        .with_progression(progression);

    for _ in 0..3 {
        position.record_win(10.0);
    }
    assert_eq!(position.bet(), 50.0);
}

#[test]
fn affordable_actions_respect_bankroll_and_hand_cap() {
    let mut short = Position::new(15.0, 10.0, 1000.0).unwrap();
    *short.hand_mut(0).unwrap() = "8H 8S".parse().unwrap();
    let actions = short.affordable_actions(0, 4).unwrap();
    assert!(!actions.contains(Action::Double));
    assert!(!actions.contains(Action::Split));
    assert!(actions.contains(Action::Hit));
    assert_eq!(short.committed(), 10.0);
    assert!(!short.can_cover_stake());

    let mut rich = Position::new(1000.0, 10.0, 1000.0).unwrap();
    *rich.hand_mut(0).unwrap() = "8H 8S".parse().unwrap();
    assert!(rich.affordable_actions(0, 4).unwrap().contains(Action::Split));
    assert!(!rich.affordable_actions(0, 1).unwrap().contains(Action::Split));
    assert!(rich.affordable_actions(3, 4).is_none());
}

#[test]
fn discard_leaves_one_empty_hand() {
    let mut position = Position::new(100.0, 10.0, 1000.0).unwrap();
    *position.hand_mut(0).unwrap() = "8H 8S".parse().unwrap();
    position.discard_hands();
    assert_eq!(position.hands().len(), 1);
    assert!(position.hand(0).unwrap().is_empty());
}

#[test]
fn reset_stats_keeps_bankroll() {
    let mut position = Position::new(100.0, 10.0, 1000.0).unwrap();
    position.record_win(10.0);
    position.record_lose(10.0);
    position.reset_stats();

    let stats = position.stats();
    assert_eq!(stats.bankroll, 100.0);
    assert_eq!(stats.wins, 0);
    assert_eq!(stats.losses, 0);
    assert_eq!(stats.max_winnings, 0.0);
}

#[test]
fn failed_rebuy_leaves_position_busted() {
    let mut position = Position::new(10.0, 10.0, 1000.0)
        .unwrap()
        .with_rebuy_amount(0.0);
    assert!(!position.is_busted());

    position.record_lose(10.0);
    assert!(position.is_busted());
    assert_eq!(position.bankroll(), 0.0);
    assert_eq!(position.bet(), 0.0);
    assert_eq!(position.winnings(), -10.0);
}
