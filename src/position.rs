//! A betting position: bankroll, bet, hands, and betting progression.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::error::PositionError;
use crate::hand::{Action, Actions, Hand};
use crate::progression::BetProgression;

/// A snapshot of a position's results so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionStats {
    /// Current bankroll.
    pub bankroll: f64,
    /// Bet for the next round.
    pub bet: f64,
    /// Bankroll minus everything bought in.
    pub winnings: f64,
    /// Highest winnings seen.
    pub max_winnings: f64,
    /// Lowest winnings seen.
    pub min_winnings: f64,
    /// Hands won.
    pub wins: u32,
    /// Hands lost.
    pub losses: u32,
    /// Longest win streak.
    pub max_win_streak: u32,
    /// Longest lose streak.
    pub max_lose_streak: u32,
}

/// One seat at the table.
#[derive(Debug, Clone)]
pub struct Position {
    hands: Vec<Hand>,
    bankroll: f64,
    /// Total money put on the table, starting bankroll included.
    bought_in: f64,
    bet: f64,
    min_bet: f64,
    max_bet: f64,
    rebuy_amount: f64,
    progression: BetProgression,
    max_winnings: f64,
    min_winnings: f64,
}

impl Position {
    /// Creates a position betting the minimum with flat progression.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::InsufficientBankroll`] if the bankroll is
    /// below `min_bet`, or [`PositionError::BetOutOfRange`] if the limits are
    /// inverted or the minimum is under one.
    pub fn new(bankroll: f64, min_bet: f64, max_bet: f64) -> Result<Self, PositionError> {
        if min_bet.is_nan() || min_bet < 1.0 || max_bet.is_nan() || max_bet < min_bet {
            return Err(PositionError::BetOutOfRange);
        }
        if bankroll.is_nan() || bankroll < min_bet {
            return Err(PositionError::InsufficientBankroll);
        }

        let mut progression = BetProgression::default();
        progression.set_max_bet(max_bet / min_bet);

        Ok(Self {
            hands: vec![Hand::new()],
            bankroll,
            bought_in: bankroll,
            bet: min_bet,
            min_bet,
            max_bet,
            rebuy_amount: 100.0,
            progression,
            max_winnings: 0.0,
            min_winnings: 0.0,
        })
    }

    /// Replaces the betting progression.
    #[must_use]
    pub fn with_progression(mut self, progression: BetProgression) -> Self {
        self.progression = progression;
        self
    }

    /// Sets the amount added when the bankroll drops below the minimum bet.
    #[must_use]
    pub const fn with_rebuy_amount(mut self, amount: f64) -> Self {
        self.rebuy_amount = amount;
        self
    }

    /// Sets the bet for the next round.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::BetOutOfRange`] if `bet` is outside
    /// `[min_bet, max_bet]`; the previous bet is kept.
    pub fn set_bet(&mut self, bet: f64) -> Result<(), PositionError> {
        if !(self.min_bet..=self.max_bet).contains(&bet) {
            return Err(PositionError::BetOutOfRange);
        }
        self.bet = bet;
        Ok(())
    }

    /// Adds money to the bankroll and to the bought-in total.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::InsufficientBankroll`] if the bankroll would
    /// still be below the minimum bet.
    pub fn rebuy(&mut self, amount: f64) -> Result<(), PositionError> {
        if amount.is_nan() || amount <= 0.0 || self.bankroll + amount < self.min_bet {
            return Err(PositionError::InsufficientBankroll);
        }
        self.bankroll += amount;
        self.bought_in += amount;
        self.track_winnings();
        Ok(())
    }

    /// Records a winning hand paying `amount`, then moves the bet along the
    /// win sequence.
    pub fn record_win(&mut self, amount: f64) {
        self.bankroll += amount;
        let units = self.progression.record_win();
        self.after_outcome(units);
    }

    /// Records a losing hand costing `amount`, then moves the bet along the
    /// lose sequence.
    ///
    /// A bankroll left below the minimum bet triggers an automatic rebuy. If
    /// that rebuy fails the position is busted: the bet drops to whatever
    /// bankroll remains and [`Position::is_busted`] reports it.
    pub fn record_lose(&mut self, amount: f64) {
        self.bankroll -= amount;
        let units = self.progression.record_lose();
        self.after_outcome(units);
    }

    fn after_outcome(&mut self, units: f64) {
        self.bet = (self.min_bet * units).min(self.max_bet);
        self.track_winnings();
        if self.is_busted() {
            match self.rebuy(self.rebuy_amount) {
                Ok(()) => log::debug!("rebought {} to {}", self.rebuy_amount, self.bankroll),
                Err(err) => log::warn!("automatic rebuy failed: {err}"),
            }
        }
        if self.bankroll < self.bet {
            self.bet = self.bankroll;
        }
    }

    fn track_winnings(&mut self) {
        let winnings = self.winnings();
        self.max_winnings = self.max_winnings.max(winnings);
        self.min_winnings = self.min_winnings.min(winnings);
    }

    /// Returns whether the bankroll has fallen below the minimum bet.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.bankroll < self.min_bet
    }

    /// Returns the total stake committed across the position's hands.
    #[must_use]
    pub fn committed(&self) -> f64 {
        let multipliers: u32 = self.hands.iter().map(|h| u32::from(h.multiplier())).sum();
        self.bet * f64::from(multipliers)
    }

    /// Returns whether the bankroll covers one more stake on top of what is
    /// already committed.
    #[must_use]
    pub fn can_cover_stake(&self) -> bool {
        self.committed() + self.bet <= self.bankroll
    }

    /// Returns the legal actions for hand `index`, without double and split
    /// when the bankroll cannot cover another stake, and without split once
    /// the position holds `max_hands` hands.
    #[must_use]
    pub fn affordable_actions(&self, index: usize, max_hands: usize) -> Option<Actions> {
        let mut actions = self.hands.get(index)?.legal_actions();
        if !self.can_cover_stake() {
            actions = actions.without(Action::Double).without(Action::Split);
        }
        if self.hands.len() >= max_hands {
            actions = actions.without(Action::Split);
        }
        Some(actions)
    }

    /// Replaces every hand with a single empty one.
    pub fn discard_hands(&mut self) {
        self.hands = vec![Hand::new()];
    }

    pub(crate) fn push_hand(&mut self, hand: Hand) -> usize {
        self.hands.push(hand);
        self.hands.len() - 1
    }

    /// Returns the position's hands in creation order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns hand `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns hand `index` mutably.
    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Returns the bet for the current or next round.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Returns the minimum bet.
    #[must_use]
    pub const fn min_bet(&self) -> f64 {
        self.min_bet
    }

    /// Returns the maximum bet.
    #[must_use]
    pub const fn max_bet(&self) -> f64 {
        self.max_bet
    }

    /// Returns bankroll minus everything bought in.
    #[must_use]
    pub fn winnings(&self) -> f64 {
        self.bankroll - self.bought_in
    }

    /// Returns the betting progression.
    #[must_use]
    pub const fn progression(&self) -> &BetProgression {
        &self.progression
    }

    /// Returns the betting progression mutably.
    pub const fn progression_mut(&mut self) -> &mut BetProgression {
        &mut self.progression
    }

    /// Returns a snapshot of the position's results.
    #[must_use]
    pub fn stats(&self) -> PositionStats {
        PositionStats {
            bankroll: self.bankroll,
            bet: self.bet,
            winnings: self.winnings(),
            max_winnings: self.max_winnings,
            min_winnings: self.min_winnings,
            wins: self.progression.wins(),
            losses: self.progression.losses(),
            max_win_streak: self.progression.max_win_streak(),
            max_lose_streak: self.progression.max_lose_streak(),
        }
    }

    /// Clears the win/lose statistics and winnings extremes.
    pub fn reset_stats(&mut self) {
        self.progression.reset_stats();
        self.max_winnings = self.winnings();
        self.min_winnings = self.winnings();
    }
}
