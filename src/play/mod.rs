//! Running games between two engines.
//!
//! `Game` owns the state and one engine per seat. Each turn it asks the
//! active seat's engine for a move, applies it through the single
//! validation chokepoint, passes the turn, and stops once a player has both
//! hands dead.

mod game;

pub use game::{Game, GameBuilder};
