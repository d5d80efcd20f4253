//! Table session: shoe, dealer, positions, and round flow.

extern crate alloc;

use alloc::vec::Vec;

use crate::autoplay::Autoplay;
use crate::card::Card;
use crate::error::{DealError, RoundError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::position::Position;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{RoundState, TurnPosition};

/// A blackjack session that owns the shoe, the dealer's hand, and every
/// position at the table.
///
/// A round runs [`deal`](Self::deal), then either manual actions or
/// [`autoplay`](Self::autoplay), then [`play_dealer`](Self::play_dealer) and
/// [`settle`](Self::settle). [`play_round`](Self::play_round) does all of it.
#[derive(Debug, Clone)]
pub struct Session {
    options: TableOptions,
    shoe: Shoe,
    positions: Vec<Position>,
    dealer: Hand,
    state: RoundState,
    turn: TurnPosition,
    autoplay: Autoplay,
    rounds_played: u64,
}

impl Session {
    /// Creates a session with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Position, Session, TableOptions};
    ///
    /// let options = TableOptions::default();
    /// let seat = Position::new(100.0, options.min_bet, options.max_bet).unwrap();
    /// let mut session = Session::new(options, vec![seat], 42).unwrap();
    /// session.simulate(10).unwrap();
    /// assert_eq!(session.rounds_played(), 10);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or there are no positions.
    pub fn new(
        options: TableOptions,
        positions: Vec<Position>,
        seed: u64,
    ) -> Result<Self, DealError> {
        if !options.is_valid() {
            return Err(DealError::InvalidOptions);
        }
        let shoe = Shoe::new(options.decks, seed)?;
        Self::with_shoe(options, positions, shoe)
    }

    /// Creates `count` positions, each starting with `bankroll` and the
    /// table limits, and a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, `count` is zero, or the
    /// bankroll is below the table minimum.
    pub fn with_positions(
        options: TableOptions,
        count: usize,
        bankroll: f64,
        seed: u64,
    ) -> Result<Self, DealError> {
        let positions = (0..count)
            .map(|_| Position::new(bankroll, options.min_bet, options.max_bet))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(options, positions, seed)
    }

    /// Creates a session that deals from `shoe`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or there are no positions.
    pub fn with_shoe(
        options: TableOptions,
        positions: Vec<Position>,
        shoe: Shoe,
    ) -> Result<Self, DealError> {
        if !options.is_valid() {
            return Err(DealError::InvalidOptions);
        }
        if positions.is_empty() {
            return Err(DealError::NoPositions);
        }

        let positions = positions
            .into_iter()
            .map(|position| position.with_rebuy_amount(options.rebuy))
            .collect();

        Ok(Self {
            autoplay: Autoplay::new(options.max_hands),
            options,
            shoe,
            positions,
            dealer: Hand::new(),
            state: RoundState::Idle,
            turn: TurnPosition {
                position_index: 0,
                hand_index: 0,
            },
            rounds_played: 0,
        })
    }

    /// Moves the turn to the next hand that still has legal actions, starting
    /// from the current one. Hands the dealer out when none are left.
    fn seek_active_hand(&mut self) {
        loop {
            let Some(position) = self.positions.get(self.turn.position_index) else {
                self.state = RoundState::DealerTurn;
                return;
            };
            if position
                .hand(self.turn.hand_index)
                .is_some_and(|hand| !hand.is_finished())
            {
                return;
            }
            if self.turn.hand_index + 1 < position.hands().len() {
                self.turn.hand_index += 1;
            } else {
                self.turn.position_index += 1;
                self.turn.hand_index = 0;
            }
        }
    }

    /// Plays a whole round automatically and settles it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is mid-round or the shoe runs out.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.deal()?;
        if self.state == RoundState::PlayerTurn {
            self.autoplay()?;
        }
        if self.state == RoundState::DealerTurn {
            self.play_dealer()?;
        }
        Ok(self.settle()?)
    }

    /// Plays `rounds` automatic rounds.
    ///
    /// # Errors
    ///
    /// Returns the first round error; rounds already played stay settled.
    pub fn simulate(&mut self, rounds: usize) -> Result<(), RoundError> {
        log::info!("simulating {rounds} rounds");
        for _ in 0..rounds {
            self.play_round()?;
        }
        for (index, position) in self.positions.iter().enumerate() {
            let stats = position.stats();
            log::info!(
                "position {}: winnings {} over {} wins / {} losses",
                index + 1,
                stats.winnings,
                stats.wins,
                stats.losses
            );
        }
        Ok(())
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the positions in seat order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns position `index`.
    pub fn position(&self, index: usize) -> Option<&Position> {
        self.positions.get(index)
    }

    /// Returns position `index` mutably, e.g. to change its bet or
    /// progression between rounds.
    pub fn position_mut(&mut self, index: usize) -> Option<&mut Position> {
        self.positions.get_mut(index)
    }

    /// Returns the dealer's hand.
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's up card.
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.up_card()
    }

    /// Returns the current round phase.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current turn position.
    pub const fn current_turn(&self) -> TurnPosition {
        self.turn
    }

    /// Returns the number of settled rounds.
    pub const fn rounds_played(&self) -> u64 {
        self.rounds_played
    }
}
