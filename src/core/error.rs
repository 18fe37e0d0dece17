//! Error type shared by the state model, the game loop and the move engines.
//!
//! Every rejected move surfaces as `Err(GameError::InvalidAction { .. })`
//! from [`Action::apply`](super::Action::apply). Nothing is mutated on that
//! path.
//!
//! A lookup miss in the exhaustive table engine is not represented here:
//! it means the table was built over the wrong state space and is treated
//! as a bug (panic).

use thiserror::Error;

use super::action::Action;
use super::state::StateKey;

/// Errors raised by the Sticks engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// The action is not legal in the current state.
    #[error("invalid action {action}: {reason}")]
    InvalidAction {
        action: Action,
        reason: &'static str,
    },

    /// A move was requested or applied after a player was defeated.
    #[error("game is already over")]
    GameOver,

    /// The winner was requested while both players still have live hands.
    #[error("game is not finished")]
    NotFinished,

    /// A hand value outside `0..=4`.
    #[error("hand value {value} is out of range (0..=4)")]
    HandOutOfRange { value: u8 },

    /// Rejection sampling never found a legal action for a state.
    #[error("no legal action sampled for {key} after {samples} attempts")]
    SamplingExhausted { key: StateKey, samples: u32 },

    /// The game loop hit its configured turn limit.
    #[error("turn limit of {turns} reached without a winner")]
    TurnLimit { turns: u32 },

    /// The interactive input stream ended.
    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A move table snapshot could not be encoded or decoded.
    #[error("move table snapshot: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        GameError::Snapshot(err.to_string())
    }
}
