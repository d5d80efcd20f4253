//! The dealer's shoe and cut-card scheduling.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// Remaining-card counts the cut card may be placed at: one to two decks.
///
/// The upper end is capped one below the shoe size so the cut card can be
/// reached after a draw. A single-deck shoe, which can never reach the range,
/// places the cut card at half a deck instead.
pub const CUT_CARD_RANGE: RangeInclusive<usize> = DECK_SIZE..=2 * DECK_SIZE;

/// A shoe of one or more standard decks.
///
/// Cards are dealt from the back. When the remaining count reaches the cut
/// card the shoe flags that a reshuffle is due, but keeps dealing so the
/// round in progress can finish; the owner calls [`Shoe::reshuffle`] between
/// rounds.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: u8,
    cards: Vec<Card>,
    cut_card: usize,
    reshuffle_due: bool,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe with the given number of decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    pub fn new(decks: u8, seed: u64) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::NoDecks);
        }

        let mut shoe = Self {
            decks,
            cards: Vec::new(),
            cut_card: 0,
            reshuffle_due: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reshuffle();
        Ok(shoe)
    }

    /// Creates a shoe whose next draws are exactly `draws`, in order.
    ///
    /// The cut card is placed as usual. A later [`Shoe::reshuffle`] rebuilds
    /// the shoe from `decks` full decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    pub fn stacked(decks: u8, draws: &[Card], seed: u64) -> Result<Self, ShoeError> {
        let mut shoe = Self::new(decks, seed)?;
        shoe.cards = draws.iter().rev().copied().collect();
        Ok(shoe)
    }

    fn build(decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }

    /// Removes and returns the next card.
    ///
    /// Raises the reshuffle-due flag when the remaining count lands on the
    /// cut card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::EmptyShoe`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop().ok_or(ShoeError::EmptyShoe)?;
        if self.cards.len() == self.cut_card && !self.reshuffle_due {
            log::debug!("cut card reached with {} cards left", self.cut_card);
            self.reshuffle_due = true;
        }
        log::trace!("drew {card}");
        Ok(card)
    }

    /// Returns whether the cut card has been reached.
    #[must_use]
    pub const fn reshuffle_due(&self) -> bool {
        self.reshuffle_due
    }

    /// Rebuilds every deck, shuffles, places a new cut card, and clears the
    /// due flag.
    pub fn reshuffle(&mut self) {
        let mut cards = Self::build(self.decks);
        cards.shuffle(&mut self.rng);
        self.cut_card = if cards.len() > DECK_SIZE {
            let upper = (*CUT_CARD_RANGE.end()).min(cards.len() - 1);
            self.rng.random_range(*CUT_CARD_RANGE.start()..=upper)
        } else {
            cards.len() / 2
        };
        self.cards = cards;
        self.reshuffle_due = false;
        log::debug!(
            "reshuffled {} decks, cut card at {}",
            self.decks,
            self.cut_card
        );
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the remaining-card count at which a reshuffle becomes due.
    #[must_use]
    pub const fn cut_card(&self) -> usize {
        self.cut_card
    }
}
