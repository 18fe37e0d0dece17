//! Core game model: hands, players, state, actions, RNG, configuration.
//!
//! Everything here is synchronous and allocation-light. `GameState` is a
//! small `Copy` value; tables and search code key on its `StateKey`.

pub mod action;
pub mod config;
pub mod error;
pub mod hands;
pub mod player;
pub mod rng;
pub mod space;
pub mod state;

pub use action::{legal_actions, Action, ActionKind, ActionList, ActionRecord};
pub use config::{GameConfig, TableConfig};
pub use error::GameError;
pub use hands::{Hand, HandPair, DEAD_AT, MAX_STICKS};
pub use player::{Player, PlayerId, PlayerPair};
pub use rng::GameRng;
pub use space::{all_states, reachable_positions, STATE_COUNT};
pub use state::{GameState, StateKey};
