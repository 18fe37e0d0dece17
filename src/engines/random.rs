//! Uniform random engine.

use super::MoveEngine;
use crate::core::{legal_actions, Action, GameError, GameRng, GameState};

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomEngine {
    rng: GameRng,
}

impl RandomEngine {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveEngine for RandomEngine {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Action, GameError> {
        let actions = legal_actions(state);
        self.rng.choose(&actions).copied().ok_or(GameError::GameOver)
    }
}
