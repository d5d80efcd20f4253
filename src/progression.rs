//! Progressive betting sequences driven by win/lose streaks.
//!
//! Bets are expressed in units (multiples of the table minimum). A
//! [`BetProgression`] owns two [`BetSequence`]s: one advanced after every
//! win, one after every loss.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ProgressionError;

/// How a sequence moves once its pattern is exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Increment {
    /// Add a fixed number of units (may be zero or negative).
    Add(f64),
    /// Multiply the previous bet by a positive factor.
    Multiply(f64),
}

impl Increment {
    /// Returns whether this is an additive increment of zero or less.
    #[must_use]
    pub fn is_non_positive(self) -> bool {
        matches!(self, Self::Add(delta) if delta <= 0.0)
    }

    /// Returns whether this is an additive increment below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Add(delta) if delta < 0.0)
    }

    const fn apply(self, bet: f64) -> f64 {
        match self {
            Self::Add(delta) => bet + delta,
            Self::Multiply(factor) => bet * factor,
        }
    }

    fn validate(self) -> Result<Self, ProgressionError> {
        match self {
            Self::Add(delta) if delta.is_finite() => Ok(self),
            Self::Multiply(factor) if factor.is_finite() && factor > 0.0 => Ok(self),
            _ => Err(ProgressionError::InvalidIncrement),
        }
    }
}

impl FromStr for Increment {
    type Err = ProgressionError;

    /// Parses `"+5"`, `"-0.5"`, `"0"` as additive and `"*2"` as
    /// multiplicative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let increment = if let Some(factor) = s.strip_prefix('*') {
            Self::Multiply(
                factor
                    .trim()
                    .parse()
                    .map_err(|_| ProgressionError::InvalidIncrement)?,
            )
        } else {
            Self::Add(s.parse().map_err(|_| ProgressionError::InvalidIncrement)?)
        };
        increment.validate()
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(delta) => write!(f, "{delta:+}"),
            Self::Multiply(factor) => write!(f, "*{factor}"),
        }
    }
}

/// One bet sequence: an explicit pattern followed by an increment rule.
#[derive(Debug, Clone, PartialEq)]
pub struct BetSequence {
    pattern: Vec<f64>,
    increment: Increment,
    max_bet: f64,
    /// Number of pattern entries consumed since the last restart.
    step: usize,
    bet: f64,
}

impl BetSequence {
    /// Creates a sequence whose pattern starts with `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is below one unit, `max_bet` is below
    /// `initial`, or the increment is not usable.
    pub fn new(initial: f64, increment: Increment, max_bet: f64) -> Result<Self, ProgressionError> {
        if !initial.is_finite() || initial < 1.0 {
            return Err(ProgressionError::InitialBelowOne);
        }
        if max_bet.is_nan() || max_bet < initial {
            return Err(ProgressionError::MaxBelowInitial);
        }

        Ok(Self {
            pattern: vec![initial],
            increment: increment.validate()?,
            max_bet,
            step: 0,
            bet: initial,
        })
    }

    /// Returns the next bet.
    ///
    /// Pattern entries are returned in order. After that, the previous bet is
    /// moved by the increment: below one unit it clamps to one and the pattern
    /// restarts on the following call; above the max it clamps to the max.
    pub fn advance(&mut self) -> f64 {
        if let Some(&bet) = self.pattern.get(self.step) {
            self.bet = bet;
        } else {
            self.bet = self.increment.apply(self.bet);
            if self.bet < 1.0 {
                self.bet = 1.0;
                self.step = 0;
                return self.bet;
            }
            if self.bet > self.max_bet {
                self.bet = self.max_bet;
            }
        }
        self.step += 1;
        self.bet
    }

    /// Rewinds to the start of the pattern.
    pub fn restart(&mut self) {
        self.step = 0;
        self.bet = self.pattern[0];
    }

    /// Takes over another sequence's position and last bet.
    pub(crate) const fn inherit(&mut self, step: usize, bet: f64) {
        self.step = step;
        self.bet = bet;
    }

    /// Appends a step to the pattern.
    ///
    /// A plain number is a bet in units; `"*f"` appends the last pattern
    /// entry multiplied by `f`.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionError::InvalidStepValue`] if the value does not
    /// parse to a positive bet; the pattern is left unchanged.
    pub fn add_step(&mut self, value: &str) -> Result<(), ProgressionError> {
        let value = value.trim();
        let last = self.pattern.last().copied().unwrap_or(1.0);
        let step = match value.strip_prefix('*') {
            Some(factor) => factor.trim().parse::<f64>().map(|factor| last * factor),
            None => value.parse::<f64>(),
        }
        .map_err(|_| ProgressionError::InvalidStepValue)?;

        if !step.is_finite() || step <= 0.0 {
            return Err(ProgressionError::InvalidStepValue);
        }
        self.pattern.push(step);
        Ok(())
    }

    /// Sets the maximum bet.
    pub const fn set_max_bet(&mut self, max_bet: f64) {
        self.max_bet = max_bet;
    }

    /// Returns the pattern.
    #[must_use]
    pub fn pattern(&self) -> &[f64] {
        &self.pattern
    }

    /// Returns the increment rule.
    #[must_use]
    pub const fn increment(&self) -> Increment {
        self.increment
    }

    /// Returns how many steps have been taken since the last restart.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Returns the most recent bet.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Returns the maximum bet.
    #[must_use]
    pub const fn max_bet(&self) -> f64 {
        self.max_bet
    }
}

impl fmt::Display for BetSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.pattern, self.increment)
    }
}

/// A complete progressive betting strategy with streak statistics.
///
/// ```
/// use bjsim::{BetProgression, Increment};
///
/// let mut progression =
///     BetProgression::new(10.0, Increment::Add(5.0), 1.0, Increment::Add(0.0), 1000.0).unwrap();
/// progression.add_win_step("15").unwrap();
///
/// let bets: Vec<f64> = (0..4).map(|_| progression.record_win()).collect();
/// assert_eq!(bets, [10.0, 15.0, 20.0, 25.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BetProgression {
    win: BetSequence,
    lose: BetSequence,
    max_bet: f64,
    win_streak: u32,
    lose_streak: u32,
    wins: u32,
    losses: u32,
    max_win_streak: u32,
    max_lose_streak: u32,
}

impl Default for BetProgression {
    /// Flat betting: one unit after every outcome.
    fn default() -> Self {
        let flat = BetSequence {
            pattern: vec![1.0],
            increment: Increment::Add(0.0),
            max_bet: 1000.0,
            step: 0,
            bet: 1.0,
        };
        Self::from_sequences(flat.clone(), flat)
    }
}

impl BetProgression {
    /// Creates a progression from the first bet and increment of each
    /// sequence and a shared maximum bet.
    ///
    /// # Errors
    ///
    /// Returns an error if either sequence is invalid.
    pub fn new(
        initial_win: f64,
        increment_win: Increment,
        initial_lose: f64,
        increment_lose: Increment,
        max_bet: f64,
    ) -> Result<Self, ProgressionError> {
        Ok(Self::from_sequences(
            BetSequence::new(initial_win, increment_win, max_bet)?,
            BetSequence::new(initial_lose, increment_lose, max_bet)?,
        ))
    }

    fn from_sequences(win: BetSequence, lose: BetSequence) -> Self {
        let max_bet = win.max_bet.max(lose.max_bet);
        Self {
            win,
            lose,
            max_bet,
            win_streak: 0,
            lose_streak: 0,
            wins: 0,
            losses: 0,
            max_win_streak: 0,
            max_lose_streak: 0,
        }
    }

    /// A negative additive increment on either side lets a sequence that is at
    /// its start pick up where the other one stopped.
    fn inherits_position(&self) -> bool {
        self.win.increment.is_negative() || self.lose.increment.is_negative()
    }

    /// A zero or negative additive increment on either side resets the
    /// opposite sequence on every outcome.
    fn resets_opposite(&self) -> bool {
        self.win.increment.is_non_positive() || self.lose.increment.is_non_positive()
    }

    /// Records a win and returns the next bet in units.
    pub fn record_win(&mut self) -> f64 {
        self.wins += 1;
        self.lose_streak = 0;
        self.win_streak += 1;
        self.max_win_streak = self.max_win_streak.max(self.win_streak);

        if self.inherits_position() && self.win.step == 0 {
            self.win.inherit(self.lose.step, self.lose.bet);
        }
        if self.resets_opposite() {
            self.lose.restart();
        }
        let bet = self.win.advance();
        log::trace!("win streak {}, next bet {bet}", self.win_streak);
        bet
    }

    /// Records a loss and returns the next bet in units.
    pub fn record_lose(&mut self) -> f64 {
        self.losses += 1;
        self.win_streak = 0;
        self.lose_streak += 1;
        self.max_lose_streak = self.max_lose_streak.max(self.lose_streak);

        if self.inherits_position() && self.lose.step == 0 {
            self.lose.inherit(self.win.step, self.win.bet);
        }
        if self.resets_opposite() {
            self.win.restart();
        }
        let bet = self.lose.advance();
        log::trace!("lose streak {}, next bet {bet}", self.lose_streak);
        bet
    }

    /// Appends a step to the win pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionError::InvalidStepValue`] for a malformed value.
    pub fn add_win_step(&mut self, value: &str) -> Result<(), ProgressionError> {
        self.win.add_step(value)
    }

    /// Appends a step to the lose pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionError::InvalidStepValue`] for a malformed value.
    pub fn add_lose_step(&mut self, value: &str) -> Result<(), ProgressionError> {
        self.lose.add_step(value)
    }

    /// Sets the maximum bet for both sequences.
    pub const fn set_max_bet(&mut self, max_bet: f64) {
        self.win.set_max_bet(max_bet);
        self.lose.set_max_bet(max_bet);
        self.max_bet = max_bet;
    }

    /// Clears the lifetime and streak statistics.
    pub const fn reset_stats(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.max_win_streak = 0;
        self.max_lose_streak = 0;
    }

    /// Returns the win sequence.
    #[must_use]
    pub const fn win_sequence(&self) -> &BetSequence {
        &self.win
    }

    /// Returns the lose sequence.
    #[must_use]
    pub const fn lose_sequence(&self) -> &BetSequence {
        &self.lose
    }

    /// Returns the maximum bet.
    #[must_use]
    pub const fn max_bet(&self) -> f64 {
        self.max_bet
    }

    /// Returns the current win streak.
    #[must_use]
    pub const fn win_streak(&self) -> u32 {
        self.win_streak
    }

    /// Returns the current lose streak.
    #[must_use]
    pub const fn lose_streak(&self) -> u32 {
        self.lose_streak
    }

    /// Returns the number of wins recorded.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns the number of losses recorded.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Returns the longest win streak seen.
    #[must_use]
    pub const fn max_win_streak(&self) -> u32 {
        self.max_win_streak
    }

    /// Returns the longest lose streak seen.
    #[must_use]
    pub const fn max_lose_streak(&self) -> u32 {
        self.max_lose_streak
    }
}

impl fmt::Display for BetProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "win: {}", self.win)?;
        writeln!(f, "lose: {}", self.lose)?;
        write!(f, "max: {}", self.max_bet)
    }
}
