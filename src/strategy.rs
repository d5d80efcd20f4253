//! Static basic-strategy lookup tables.

use crate::card::Rank;
use crate::hand::{Action, Actions, Hand};

/// The dealer's up card, normalised to one of ten columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerBucket(usize);

impl DealerBucket {
    /// Returns the table column: 0 for a two through 7 for a nine, 8 for the
    /// ten class, 9 for an ace.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<Rank> for DealerBucket {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Ace => Self(9),
            rank if rank.is_ten_valued() => Self(8),
            rank => Self(rank.value() as usize - 2),
        }
    }
}

/// A table entry, before it is checked against the hand's legal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Stand.
    Stand,
    /// Hit.
    Hit,
    /// Double if allowed, otherwise hit.
    DoubleElseHit,
    /// Double if allowed, otherwise stand.
    DoubleElseStand,
    /// Split the pair.
    Split,
}

impl Recommendation {
    /// Resolves the entry against `legal`. Double-else entries fall back when
    /// doubling is unavailable, and anything still not legal becomes a stand.
    #[must_use]
    pub const fn resolve(self, legal: Actions) -> Action {
        let action = match self {
            Self::Stand => Action::Stand,
            Self::Hit => Action::Hit,
            Self::Split => Action::Split,
            Self::DoubleElseHit if legal.contains(Action::Double) => Action::Double,
            Self::DoubleElseHit => Action::Hit,
            Self::DoubleElseStand if legal.contains(Action::Double) => Action::Double,
            Self::DoubleElseStand => Action::Stand,
        };
        if legal.contains(action) {
            action
        } else {
            Action::Stand
        }
    }
}

use Recommendation::{
    DoubleElseHit as DH, DoubleElseStand as DS, Hit as H, Split as P, Stand as S,
};

type Row = [Recommendation; 10];

const HARD_MIN: u8 = 4;
const SOFT_MIN: u8 = 12;

/// Hard totals 4 through 21.
const HARD: [Row; 18] = [
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [H, DH, DH, DH, DH, H, H, H, H, H],
    [DH, DH, DH, DH, DH, DH, DH, DH, H, H],
    [DH, DH, DH, DH, DH, DH, DH, DH, DH, DH],
    [H, H, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, H, H, H, H, H],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
];

/// Soft totals 12 through 21, ace counted as 11.
const SOFT: [Row; 10] = [
    [H, H, S, S, S, H, H, H, H, H],
    [H, H, H, DH, DH, H, H, H, H, H],
    [H, H, H, DH, DH, H, H, H, H, H],
    [H, H, DH, DH, DH, H, H, H, H, H],
    [H, H, DH, DH, DH, H, H, H, H, H],
    [H, DH, DH, DH, DH, H, H, H, H, H],
    [DS, DS, DS, DS, DS, S, S, H, H, H],
    [S, S, S, S, DS, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S],
];

/// Pairs of twos through nines, then the ten class, then aces.
const PAIRS: [Row; 10] = [
    [P, P, P, P, P, P, H, H, H, H],
    [P, P, P, P, P, P, H, H, H, H],
    [H, H, H, P, P, H, H, H, H, H],
    [DH, DH, DH, DH, DH, DH, DH, DH, H, H],
    [P, P, P, P, P, H, H, H, H, H],
    [P, P, P, P, P, P, H, H, H, H],
    [P, P, P, P, P, P, P, P, P, P],
    [P, P, P, P, P, S, P, P, S, S],
    [S, S, S, S, S, S, S, S, S, S],
    [P, P, P, P, P, P, P, P, P, P],
];

/// Stateless basic-strategy lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTable;

impl DecisionTable {
    /// Returns the hard-total entry. Totals outside 4..=21 use the nearest row.
    #[must_use]
    pub fn hard(total: u8, up: Rank) -> Recommendation {
        let row = total.clamp(HARD_MIN, 21) - HARD_MIN;
        HARD[row as usize][DealerBucket::from(up).index()]
    }

    /// Returns the soft-total entry. Totals outside 12..=21 use the nearest row.
    #[must_use]
    pub fn soft(total: u8, up: Rank) -> Recommendation {
        let row = total.clamp(SOFT_MIN, 21) - SOFT_MIN;
        SOFT[row as usize][DealerBucket::from(up).index()]
    }

    /// Returns the pair entry for a pair of `rank`.
    #[must_use]
    pub fn pair(rank: Rank, up: Rank) -> Recommendation {
        let row = match rank {
            Rank::Ace => 9,
            rank if rank.is_ten_valued() => 8,
            rank => rank.value() as usize - 2,
        };
        PAIRS[row][DealerBucket::from(up).index()]
    }

    /// Recommends an action for `hand` against the dealer's up card, using
    /// the hand's own legal actions.
    ///
    /// ```
    /// use bjsim::{Action, DecisionTable, Hand, Rank};
    ///
    /// let hand: Hand = "8H 8S".parse().unwrap();
    /// assert_eq!(DecisionTable::recommend(&hand, Rank::Ten), Action::Split);
    /// ```
    #[must_use]
    pub fn recommend(hand: &Hand, up: Rank) -> Action {
        Self::recommend_with(hand, up, hand.legal_actions())
    }

    /// Recommends an action for `hand` restricted to `legal`.
    ///
    /// The pair table is consulted first while a split is legal, and only its
    /// split entries are honoured; everything else falls through to the soft
    /// or hard table.
    #[must_use]
    pub fn recommend_with(hand: &Hand, up: Rank, legal: Actions) -> Action {
        if legal.contains(Action::Split) {
            if let Some(card) = hand.cards().first() {
                if Self::pair(card.rank, up) == Recommendation::Split {
                    return Action::Split;
                }
            }
        }

        let entry = if hand.is_soft() {
            Self::soft(hand.total(), up)
        } else {
            Self::hard(hand.total(), up)
        };
        entry.resolve(legal)
    }
}
