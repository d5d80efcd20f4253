//! Session state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Between rounds; ready to deal.
    Idle,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Index into the session's positions.
    pub position_index: usize,
    /// Index into the position's hands (for splits).
    pub hand_index: usize,
}
