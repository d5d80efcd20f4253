//! Automatic basic-strategy play for a position's hands.

extern crate alloc;

use alloc::collections::VecDeque;

use crate::card::Rank;
use crate::error::{HandError, PlayError, ShoeError};
use crate::hand::{Action, Hand};
use crate::position::Position;
use crate::shoe::Shoe;
use crate::strategy::DecisionTable;

/// Default cap on hands per position: three splits.
pub const MAX_HANDS: usize = 4;

fn hand_at(position: &mut Position, index: usize) -> Result<&mut Hand, HandError> {
    position.hand_mut(index).ok_or(HandError::HandOver)
}

/// Splits hand `index`, deals one card to each half, and appends the new hand
/// to the position. Split aces are restricted to standing or re-splitting.
///
/// Returns the index of the new hand. Nothing is mutated on error.
pub(crate) fn split_hand(
    position: &mut Position,
    index: usize,
    shoe: &mut Shoe,
) -> Result<usize, PlayError> {
    let hand = hand_at(position, index)?;
    if !hand.can_split() {
        return Err(HandError::CannotSplit.into());
    }
    if shoe.remaining() < 2 {
        return Err(ShoeError::EmptyShoe.into());
    }

    let aces = hand.cards().first().is_some_and(|c| c.rank == Rank::Ace);
    let mut sibling = hand.split_off()?;
    hand.add_card(shoe.draw()?);
    sibling.add_card(shoe.draw()?);
    if aces {
        hand.restrict_to_stand();
        sibling.restrict_to_stand();
    }

    let new_index = position.push_hand(sibling);
    log::debug!("split hand {index} into {index} and {new_index}");
    Ok(new_index)
}

/// Drives a position's hands to completion with [`DecisionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    max_hands: usize,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(MAX_HANDS)
    }
}

impl Autoplay {
    /// Creates a controller allowing up to `max_hands` hands per position.
    #[must_use]
    pub const fn new(max_hands: usize) -> Self {
        Self { max_hands }
    }

    /// Returns the hand cap.
    #[must_use]
    pub const fn max_hands(&self) -> usize {
        self.max_hands
    }

    /// Plays every hand of `position` against the dealer's `up` card, drawing
    /// from `shoe`, until each hand is finished.
    ///
    /// Hands are processed first-in first-out: the original hands in order,
    /// then each split-off hand in the order it was created. Double and split
    /// are quietly dropped from a decision when the bankroll cannot cover
    /// another stake.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::Shoe`] if the shoe runs out of cards.
    pub fn play_position(
        &self,
        position: &mut Position,
        up: Rank,
        shoe: &mut Shoe,
    ) -> Result<(), PlayError> {
        let mut queue: VecDeque<usize> = (0..position.hands().len()).collect();

        while let Some(index) = queue.pop_front() {
            while let Some(legal) = position
                .affordable_actions(index, self.max_hands)
                .filter(|legal| !legal.is_empty())
            {
                let hand = hand_at(position, index)?;
                let action = DecisionTable::recommend_with(hand, up, legal);
                log::trace!("hand {index} ({hand}) vs {up:?}: {action:?}");

                match action {
                    Action::Split => queue.push_back(split_hand(position, index, shoe)?),
                    Action::Double => {
                        let card = shoe.draw()?;
                        hand.double_down(card)?;
                    }
                    Action::Hit => hand.add_card(shoe.draw()?),
                    Action::Stand => hand.stand()?,
                }
            }
        }

        Ok(())
    }
}
