use crate::autoplay::split_hand;
use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Action, Hand};

use super::{RoundState, Session, TurnPosition};

impl Session {
    fn ensure_turn(&self, position_index: usize, hand_index: usize) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let position = self
            .positions
            .get(position_index)
            .ok_or(ActionError::PositionNotFound)?;
        position
            .hand(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        if self.turn
            != (TurnPosition {
                position_index,
                hand_index,
            })
        {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    fn current_hand(&self) -> Result<&Hand, ActionError> {
        self.positions
            .get(self.turn.position_index)
            .ok_or(ActionError::PositionNotFound)?
            .hand(self.turn.hand_index)
            .ok_or(ActionError::HandNotFound)
    }

    fn current_hand_mut(&mut self) -> Result<&mut Hand, ActionError> {
        self.positions
            .get_mut(self.turn.position_index)
            .ok_or(ActionError::PositionNotFound)?
            .hand_mut(self.turn.hand_index)
            .ok_or(ActionError::HandNotFound)
    }

    fn require(&self, action: Action) -> Result<(), ActionError> {
        if self.current_hand()?.legal_actions().contains(action) {
            Ok(())
        } else {
            Err(ActionError::IllegalAction)
        }
    }

    fn require_stake(&self) -> Result<(), ActionError> {
        let position = self
            .positions
            .get(self.turn.position_index)
            .ok_or(ActionError::PositionNotFound)?;
        if position.can_cover_stake() {
            Ok(())
        } else {
            Err(ActionError::InsufficientBankroll)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this hand's turn, the hand cannot hit, or
    /// the shoe is empty.
    pub fn hit(&mut self, position_index: usize, hand_index: usize) -> Result<Card, ActionError> {
        self.ensure_turn(position_index, hand_index)?;
        self.require(Action::Hit)?;

        let card = self.shoe.draw()?;
        self.current_hand_mut()?.add_card(card);
        self.seek_active_hand();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this hand's turn or the hand is over.
    pub fn stand(&mut self, position_index: usize, hand_index: usize) -> Result<(), ActionError> {
        self.ensure_turn(position_index, hand_index)?;
        self.current_hand_mut()?.stand()?;
        self.seek_active_hand();
        Ok(())
    }

    /// Player action: Double down (double the stake, receive one card, then
    /// stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this hand's turn, the hand cannot
    /// double, the bankroll cannot cover another stake, or the shoe is empty.
    pub fn double_down(
        &mut self,
        position_index: usize,
        hand_index: usize,
    ) -> Result<Card, ActionError> {
        self.ensure_turn(position_index, hand_index)?;
        self.require(Action::Double)?;
        self.require_stake()?;

        let card = self.shoe.draw()?;
        self.current_hand_mut()?.double_down(card)?;
        self.seek_active_hand();

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The new hand is appended after the position's existing hands and is
    /// played after them. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this hand's turn, the hand is not a
    /// splittable pair, the position already holds the maximum number of
    /// hands, the bankroll cannot cover another stake, or the shoe is empty.
    pub fn split(&mut self, position_index: usize, hand_index: usize) -> Result<usize, ActionError> {
        self.ensure_turn(position_index, hand_index)?;
        self.require(Action::Split)?;
        if self.positions[position_index].hands().len() >= self.options.max_hands {
            return Err(ActionError::MaxHandsReached);
        }
        self.require_stake()?;

        let new_index = split_hand(
            &mut self.positions[position_index],
            hand_index,
            &mut self.shoe,
        )?;
        self.seek_active_hand();

        Ok(new_index)
    }

    /// Plays every remaining hand with basic strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not waiting for player actions or
    /// the shoe runs out.
    pub fn autoplay(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        let up = self.dealer.up_card().ok_or(ActionError::InvalidState)?.rank;

        for position in self.positions.iter_mut().skip(self.turn.position_index) {
            self.autoplay.play_position(position, up, &mut self.shoe)?;
        }

        self.turn = TurnPosition {
            position_index: self.positions.len(),
            hand_index: 0,
        };
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
