//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank};
use crate::error::HandError;

/// A single playing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Keep the current hand.
    Stand,
    /// Take one more card.
    Hit,
    /// Double the stake, take exactly one card, and finish.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    const fn bit(self) -> u8 {
        match self {
            Self::Stand => 1,
            Self::Hit => 1 << 1,
            Self::Double => 1 << 2,
            Self::Split => 1 << 3,
        }
    }
}

/// A small set of [`Action`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Actions(u8);

impl Actions {
    /// The empty set; the hand is over.
    pub const NONE: Self = Self(0);

    /// Returns whether the set contains `action`.
    #[must_use]
    pub const fn contains(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    /// Returns the set with `action` added.
    #[must_use]
    pub const fn with(self, action: Action) -> Self {
        Self(self.0 | action.bit())
    }

    /// Returns the set with `action` removed.
    #[must_use]
    pub const fn without(self, action: Action) -> Self {
        Self(self.0 & !action.bit())
    }

    /// Returns whether no actions remain.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained actions in Stand, Hit, Double, Split order.
    pub fn iter(self) -> impl Iterator<Item = Action> {
        [Action::Stand, Action::Hit, Action::Double, Action::Split]
            .into_iter()
            .filter(move |&action| self.contains(action))
    }
}

impl FromIterator<Action> for Actions {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Valuation {
    total: u8,
    soft: bool,
    bust: bool,
    blackjack: bool,
}

/// Walks the cards left to right. An ace counts 11 while that keeps the
/// running total at or under 21; going over 21 demotes a soft ace once,
/// otherwise the hand is bust. Totals saturate at `u8::MAX`.
fn evaluate_cards(cards: &[Card]) -> Valuation {
    let mut v = Valuation::default();

    for card in cards {
        if card.rank == Rank::Ace {
            if v.total.saturating_add(11) > 21 {
                v.total = v.total.saturating_add(1);
            } else {
                v.total += 11;
                v.soft = true;
            }
        } else {
            v.total = v.total.saturating_add(card.rank.value());
        }

        if v.total == 21 && cards.len() == 2 {
            v.blackjack = true;
            v.soft = false;
        } else if v.total > 21 {
            if v.soft {
                v.total -= 10;
                v.soft = false;
            } else {
                v.bust = true;
            }
        }
    }

    v
}

/// Cards dealt to one betting position, with all derived state kept current.
///
/// Every mutation re-evaluates the full card list, so the total, softness,
/// bust and blackjack flags and the legal action set never go stale.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    valuation: Valuation,
    actions: Actions,
    /// Stake multiplier: 1, or 2 once doubled.
    multiplier: u8,
    stood: bool,
    /// Split-aces restriction: only stand or re-split.
    restricted: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub fn new() -> Self {
        let mut hand = Self {
            cards: Vec::new(),
            valuation: Valuation::default(),
            actions: Actions::NONE,
            multiplier: 1,
            stood: false,
            restricted: false,
        };
        hand.refresh();
        hand
    }

    /// Creates a two-card hand.
    #[must_use]
    pub fn pair(first: Card, second: Card) -> Self {
        let mut hand = Self::new();
        hand.cards.extend([first, second]);
        hand.refresh();
        hand
    }

    /// Creates a hand from zero or two seed cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidHandInit`] for any other card count.
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        match *cards {
            [] => Ok(Self::new()),
            [first, second] => Ok(Self::pair(first, second)),
            _ => Err(HandError::InvalidHandInit),
        }
    }

    fn single(card: Card) -> Self {
        let mut hand = Self::new();
        hand.add_card(card);
        hand
    }

    fn refresh(&mut self) {
        self.valuation = evaluate_cards(&self.cards);
        self.actions = self.compute_actions();
    }

    fn compute_actions(&self) -> Actions {
        let v = self.valuation;
        if v.bust || v.total >= 21 || self.stood || self.multiplier > 1 {
            return Actions::NONE;
        }

        let mut actions = Actions::NONE.with(Action::Stand);
        if !self.restricted {
            actions = actions.with(Action::Hit);
            if self.cards.len() == 2 {
                actions = actions.with(Action::Double);
            }
        }
        if self.can_split() {
            actions = actions.with(Action::Split);
        }
        actions
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.refresh();
    }

    /// Removes the card at `index`, returning it.
    ///
    /// Returns `None` if there is no card at that position.
    pub fn discard(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            return None;
        }
        let card = self.cards.remove(index);
        self.refresh();
        Some(card)
    }

    /// Moves the second card of a pair into a new one-card hand.
    ///
    /// The caller deals one fresh card to each resulting hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CannotSplit`] unless the hand holds exactly two
    /// pair-eligible cards.
    pub fn split_off(&mut self) -> Result<Self, HandError> {
        if !self.can_split() {
            return Err(HandError::CannotSplit);
        }
        let card = self.cards.pop().ok_or(HandError::CannotSplit)?;
        self.restricted = false;
        self.refresh();
        Ok(Self::single(card))
    }

    /// Locks the stake multiplier at 2 and adds the one card a double
    /// receives. The hand is finished afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CannotDouble`] if doubling is not legal; the hand
    /// is left unchanged.
    pub fn double_down(&mut self, card: Card) -> Result<(), HandError> {
        if !self.actions.contains(Action::Double) {
            return Err(HandError::CannotDouble);
        }
        self.multiplier = 2;
        self.add_card(card);
        Ok(())
    }

    /// Stands on the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::HandOver`] if the hand has no legal actions.
    pub fn stand(&mut self) -> Result<(), HandError> {
        if !self.actions.contains(Action::Stand) {
            return Err(HandError::HandOver);
        }
        self.stood = true;
        self.refresh();
        Ok(())
    }

    /// Applies the split-aces rule: the hand may only stand, or re-split if it
    /// is still an ace pair.
    pub fn restrict_to_stand(&mut self) {
        self.restricted = true;
        self.refresh();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, which is the dealer's up card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the hand total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.valuation.total
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.valuation.soft
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.valuation.bust
    }

    /// Returns whether the hand is 21 on exactly two cards.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.valuation.blackjack
    }

    /// Returns the stake multiplier (1, or 2 after doubling).
    #[must_use]
    pub const fn multiplier(&self) -> u8 {
        self.multiplier
    }

    /// Returns the legal actions for the hand's current state.
    #[must_use]
    pub const fn legal_actions(&self) -> Actions {
        self.actions
    }

    /// Returns whether the hand has no legal actions left.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns whether the hand is limited by the split-aces rule.
    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Returns whether the hand is two pair-eligible cards.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(*self.cards, [first, second] if first.rank.pairs_with(second.rank))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses whitespace-separated cards, e.g. `"AH KS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::from_cards(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "Total: {}", self.total())?;
        if self.is_bust() {
            write!(f, " (BUST)")
        } else if self.is_blackjack() {
            write!(f, " (BLACKJACK)")
        } else if self.is_soft() {
            write!(f, " (SOFT)")
        } else {
            Ok(())
        }
    }
}
