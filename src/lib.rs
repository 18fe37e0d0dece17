//! # sticks
//!
//! State-space and move-validation engine for the two-player hand game
//! Sticks (a.k.a. Chopsticks).
//!
//! Each player has two hands holding 0-4 sticks. On a turn the active player
//! either attacks (adds one of their live hands to a live hand of the
//! opponent; five or more kills that hand) or splits (redistributes their own
//! sticks into a different arrangement). A player with both hands dead loses.
//!
//! ## Design Principles
//!
//! 1. **One chokepoint**: hand values change only in [`Action::apply`], which
//!    validates first and leaves the state untouched on failure.
//!
//! 2. **Value-type keys**: lookups use the four-byte [`StateKey`], never a
//!    live `GameState`.
//!
//! 3. **Engines propose, the loop disposes**: a [`MoveEngine`] only suggests
//!    a move; the game loop applies it.
//!
//! ## Modules
//!
//! - `core`: hands, players, state, actions, state space, RNG, config, errors
//! - `engines`: interactive, exhaustive-table and random move engines
//! - `play`: the game loop

pub mod core;
pub mod engines;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    legal_actions, Action, ActionKind, ActionRecord, GameConfig, GameError, GameRng, GameState,
    Hand, HandPair, Player, PlayerId, PlayerPair, StateKey, TableConfig,
};

pub use crate::engines::{Interactive, MoveEngine, RandomEngine, TableEngine};

pub use crate::play::{Game, GameBuilder};
