//! A blackjack simulation core with optional `no_std` support.
//!
//! The crate values hands as cards are added, plays them with a static
//! basic-strategy table, and sizes each next bet with a progressive betting
//! scheme. [`Session`] ties these together into full rounds against a
//! dealer, either driven by the caller's decisions or played automatically.
//!
//! # Example
//!
//! ```
//! use bjsim::{BetProgression, Increment, Session, TableOptions};
//!
//! let options = TableOptions::default().with_decks(6);
//! let mut session = Session::with_positions(options, 1, 500.0, 7).unwrap();
//!
//! // Press wins by half a unit, drop back to the minimum after a loss.
//! let progression =
//!     BetProgression::new(1.5, Increment::Add(0.5), 1.0, Increment::Add(0.0), 10.0).unwrap();
//! *session.position_mut(0).unwrap().progression_mut() = progression;
//!
//! let result = session.play_round().unwrap();
//! assert_eq!(result.positions.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod autoplay;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod position;
pub mod progression;
pub mod result;
pub mod session;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use autoplay::{Autoplay, MAX_HANDS};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, DealError, HandError, PlayError, PositionError, ProgressionError, RoundError,
    ShoeError, ShowdownError,
};
pub use hand::{Action, Actions, Hand};
pub use options::TableOptions;
pub use position::{Position, PositionStats};
pub use progression::{BetProgression, BetSequence, Increment};
pub use result::{HandOutcome, HandResult, PositionResult, RoundResult};
pub use session::{RoundState, Session, TurnPosition};
pub use shoe::{CUT_CARD_RANGE, Shoe};
pub use strategy::{DealerBucket, DecisionTable, Recommendation};
