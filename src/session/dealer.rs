extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, PositionResult, RoundResult};

use super::{RoundState, Session, TurnPosition};

impl Session {
    /// Checks if any hand still needs the dealer's final total.
    fn any_live_hands(&self) -> bool {
        self.positions
            .iter()
            .flat_map(|position| position.hands())
            .any(|hand| !hand.is_bust() && !hand.is_blackjack())
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher. Soft 17 is hit unless
    /// `stand_on_soft_17` is set. The dealer does not draw when every player
    /// hand is bust or a blackjack.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in the dealer's turn or the shoe
    /// is empty while the dealer must draw.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn = Vec::new();
        if self.any_live_hands() {
            loop {
                let total = self.dealer.total();
                let stands_on_17 = !self.dealer.is_soft() || self.options.stand_on_soft_17;
                if total > 17 || (total == 17 && stands_on_17) {
                    break;
                }
                let card = self.shoe.draw()?;
                self.dealer.add_card(card);
                drawn.push(card);
            }
        }

        log::debug!("dealer finishes with {}", self.dealer);
        self.state = RoundState::RoundOver;
        Ok(drawn)
    }

    fn outcome(&self, hand: &Hand) -> HandOutcome {
        let dealer = &self.dealer;
        if hand.is_blackjack() {
            if dealer.is_blackjack() {
                HandOutcome::Push
            } else {
                HandOutcome::Blackjack
            }
        } else if hand.is_bust() || dealer.is_blackjack() {
            HandOutcome::Lose
        } else if dealer.is_bust() || dealer.total() < hand.total() {
            HandOutcome::Win
        } else if dealer.total() > hand.total() {
            HandOutcome::Lose
        } else {
            HandOutcome::Push
        }
    }

    /// Settles every hand against the dealer.
    ///
    /// Each win or loss is recorded on its position in hand order, which moves
    /// the bankroll and the betting progression. Afterwards all hands are
    /// discarded and the shoe is reshuffled if the cut card was reached.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let mut results = Vec::with_capacity(self.positions.len());
        for index in 0..self.positions.len() {
            let position = &self.positions[index];
            let stake = position.bet();
            let hand_results: Vec<HandResult> = position
                .hands()
                .iter()
                .enumerate()
                .map(|(hand_index, hand)| {
                    let wager = stake * f64::from(hand.multiplier());
                    let outcome = self.outcome(hand);
                    let net = match outcome {
                        HandOutcome::Win => wager,
                        HandOutcome::Blackjack => wager * self.options.blackjack_pays,
                        HandOutcome::Lose => -wager,
                        HandOutcome::Push => 0.0,
                    };
                    HandResult {
                        hand_index,
                        outcome,
                        stake: wager,
                        net,
                        player_total: hand.total(),
                    }
                })
                .collect();

            let position = &mut self.positions[index];
            for result in &hand_results {
                match result.outcome {
                    HandOutcome::Win | HandOutcome::Blackjack => position.record_win(result.net),
                    HandOutcome::Lose => position.record_lose(result.stake),
                    HandOutcome::Push => {}
                }
            }
            position.discard_hands();

            results.push(PositionResult {
                position: index,
                net: hand_results.iter().map(|result| result.net).sum(),
                hands: hand_results,
                bankroll: position.bankroll(),
                next_bet: position.bet(),
            });
        }

        let result = RoundResult {
            positions: results,
            dealer_total: self.dealer.total(),
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack: self.dealer.is_blackjack(),
            reshuffled: self.shoe.reshuffle_due(),
        };

        self.dealer = Hand::new();
        if result.reshuffled {
            self.shoe.reshuffle();
        }
        self.turn = TurnPosition {
            position_index: 0,
            hand_index: 0,
        };
        self.state = RoundState::Idle;
        self.rounds_played += 1;

        Ok(result)
    }
}
