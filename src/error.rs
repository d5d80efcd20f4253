//! Error types for simulation operations.

use thiserror::Error;

/// Errors that can occur while building or mutating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand must start with zero or exactly two cards.
    #[error("a hand must start with zero or two cards")]
    InvalidHandInit,
    /// Card text is not a valid rank followed by a suit letter.
    #[error("malformed card")]
    MalformedCard,
    /// The hand is not a two-card pair.
    #[error("hand cannot be split")]
    CannotSplit,
    /// Doubling is not legal for this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The hand has no legal actions left.
    #[error("hand is over")]
    HandOver,
}

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
    /// A shoe needs at least one deck.
    #[error("a shoe needs at least one deck")]
    NoDecks,
}

/// Errors that can occur when configuring a bet progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// A pattern step is neither a positive bet multiple nor a `*factor` token.
    #[error("invalid step value")]
    InvalidStepValue,
    /// An increment is neither a number nor a positive `*factor` token.
    #[error("invalid increment")]
    InvalidIncrement,
    /// The first bet of a sequence is below one unit.
    #[error("initial bet must be at least one unit")]
    InitialBelowOne,
    /// The maximum bet is below the first bet of a sequence.
    #[error("max bet must not be below the initial bet")]
    MaxBelowInitial,
}

/// Errors that can occur when managing a position's bankroll and bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// Bet is outside the position's `[min, max]` range.
    #[error("bet out of range")]
    BetOutOfRange,
    /// The bankroll cannot cover the request.
    #[error("insufficient bankroll")]
    InsufficientBankroll,
}

/// Errors that can occur while autoplaying a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    /// A hand rejected a mutation.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid session state for dealing.
    #[error("invalid session state for dealing")]
    InvalidState,
    /// The session has no positions.
    #[error("no positions at the table")]
    NoPositions,
    /// Table options are inconsistent.
    #[error("invalid table options")]
    InvalidOptions,
    /// A position could not be seated.
    #[error(transparent)]
    Position(#[from] PositionError),
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid session state for this action.
    #[error("invalid session state for this action")]
    InvalidState,
    /// Not this hand's turn.
    #[error("not this hand's turn")]
    NotYourTurn,
    /// Position not found.
    #[error("position not found")]
    PositionNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// The action is not legal for this hand.
    #[error("action is not legal for this hand")]
    IllegalAction,
    /// The position already holds the maximum number of hands.
    #[error("maximum hands reached")]
    MaxHandsReached,
    /// The bankroll cannot cover another stake.
    #[error("insufficient bankroll for this action")]
    InsufficientBankroll,
    /// A hand rejected a mutation.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

impl From<PlayError> for ActionError {
    fn from(err: PlayError) -> Self {
        match err {
            PlayError::Shoe(err) => Self::Shoe(err),
            PlayError::Hand(err) => Self::Hand(err),
        }
    }
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid session state for showdown.
    #[error("invalid session state for showdown")]
    InvalidState,
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur while running whole rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Playing the positions failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
