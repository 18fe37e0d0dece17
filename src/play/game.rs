//! Game loop.

use crate::core::{ActionRecord, GameConfig, GameError, GameState, PlayerId, PlayerPair};
use crate::engines::MoveEngine;

/// One game between two seated engines.
pub struct Game {
    state: GameState,
    engines: PlayerPair<Box<dyn MoveEngine>>,
    config: GameConfig,
    history: Vec<ActionRecord>,
}

/// Builder for creating a Game.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    start: GameState,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_turns(mut self, turns: u32) -> Self {
        self.config.max_turns = Some(turns);
        self
    }

    /// Start from a position other than (1,1)/(1,1).
    pub fn start_from(mut self, state: GameState) -> Self {
        self.start = state;
        self
    }

    /// Seat `one` and `two` and build the game.
    pub fn build(self, one: impl MoveEngine + 'static, two: impl MoveEngine + 'static) -> Game {
        let one: Box<dyn MoveEngine> = Box::new(one);
        let two: Box<dyn MoveEngine> = Box::new(two);
        Game {
            state: self.start,
            engines: PlayerPair::from_parts(one, two),
            config: self.config,
            history: Vec::new(),
        }
    }
}

impl Game {
    /// Standard game from the opening position with no turn limit.
    pub fn new(one: impl MoveEngine + 'static, two: impl MoveEngine + 'static) -> Self {
        GameBuilder::new().build(one, two)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.history.len() as u32
    }

    /// 1-based number of the player to move.
    #[must_use]
    pub fn active_player_num(&self) -> usize {
        self.state.active().number()
    }

    #[must_use]
    pub fn game_is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Winner of a finished game; `NotFinished` while the game is running.
    pub fn winner(&self) -> Result<PlayerId, GameError> {
        self.state.winner()
    }

    /// Play one turn: ask the active seat for a move, apply it, pass the turn.
    ///
    /// An illegal move is returned as `InvalidAction` and leaves the state
    /// untouched.
    pub fn step(&mut self) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if let Some(limit) = self.config.max_turns {
            if self.turns() >= limit {
                return Err(GameError::TurnLimit { turns: limit });
            }
        }

        let player = self.state.active();
        let engine = &mut self.engines[player];
        let action = engine.choose_move(&self.state)?;

        if let Err(err) = self.state.play(&action) {
            tracing::warn!(%player, engine = engine.name(), %action, "rejected move");
            return Err(err);
        }

        let turn = self.turns() + 1;
        self.history.push(ActionRecord::new(player, action, turn));
        tracing::debug!(turn, %player, %action, key = %self.state.key(), "move applied");
        Ok(())
    }

    /// Play until a player is defeated and return the winner.
    ///
    /// Stops early on the first error: an illegal move, a closed input, or
    /// the configured turn limit.
    pub fn play(&mut self) -> Result<PlayerId, GameError> {
        while !self.game_is_over() {
            self.step()?;
        }

        let winner = self.state.winner()?;
        tracing::info!(%winner, turns = self.turns(), "game over");
        Ok(winner)
    }
}
