//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher total).
    Win,
    /// Player loses (player busts or dealer has higher total).
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Amount staked on this hand, doubling included.
    pub stake: f64,
    /// Money won (positive) or lost (negative).
    pub net: f64,
    /// The player's hand total.
    pub player_total: u8,
}

/// Result for a single position after settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionResult {
    /// Index of the position at the table.
    pub position: usize,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Net result over all hands.
    pub net: f64,
    /// Bankroll after settlement.
    pub bankroll: f64,
    /// Bet for the next round.
    pub next_bet: f64,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Results for each position.
    pub positions: Vec<PositionResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Whether the shoe was reshuffled after the round.
    pub reshuffled: bool,
}
