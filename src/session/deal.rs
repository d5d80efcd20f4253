use crate::error::{DealError, ShoeError};
use crate::hand::Hand;

use super::{RoundState, Session, TurnPosition};

impl Session {
    /// Deals two cards to every position and the dealer.
    ///
    /// Cards go round-robin: each position's first card, the dealer's up
    /// card, each position's second card, then the dealer's hole card. A
    /// dealer blackjack ends the round straight away. A shoe too short for
    /// the deal is reshuffled first.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or even a full shoe
    /// cannot cover the deal; nothing is dealt in that case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Idle {
            return Err(DealError::InvalidState);
        }

        let cards_needed = (self.positions.len() + 1) * 2;
        if self.shoe.remaining() < cards_needed {
            log::debug!("{} cards left, reshuffling before the deal", self.shoe.remaining());
            self.shoe.reshuffle();
        }
        if self.shoe.remaining() < cards_needed {
            return Err(ShoeError::EmptyShoe.into());
        }

        for position in &mut self.positions {
            position.discard_hands();
        }
        self.dealer = Hand::new();

        for _ in 0..2 {
            for position in &mut self.positions {
                let card = self.shoe.draw()?;
                if let Some(hand) = position.hand_mut(0) {
                    hand.add_card(card);
                }
            }
            let card = self.shoe.draw()?;
            self.dealer.add_card(card);
        }

        self.turn = TurnPosition {
            position_index: 0,
            hand_index: 0,
        };

        if self.dealer.is_blackjack() {
            log::debug!("dealer has blackjack");
            self.state = RoundState::RoundOver;
        } else {
            // Skip hands dealt a blackjack
            self.state = RoundState::PlayerTurn;
            self.seek_active_hand();
        }

        Ok(())
    }
}
