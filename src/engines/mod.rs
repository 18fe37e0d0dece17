//! Move-selection engines.
//!
//! A `MoveEngine` looks at a `GameState` and proposes an action for the
//! active player. Engines never touch the state themselves: the game loop
//! applies the proposal through [`Action::apply`], which is where illegal
//! proposals are rejected.
//!
//! - [`Interactive`]: asks a human over any `BufRead`/`Write` pair
//! - [`TableEngine`]: precomputes one legal action for every state
//! - [`RandomEngine`]: uniform over the legal actions

pub mod interactive;
pub mod random;
pub mod table;

pub use interactive::Interactive;
pub use random::RandomEngine;
pub use table::TableEngine;

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{Action, GameError, GameState};

/// Produces an action for the active player of a state.
pub trait MoveEngine {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Propose a move. The result is not guaranteed to be legal.
    fn choose_move(&mut self, state: &GameState) -> Result<Action, GameError>;
}

impl<E: MoveEngine + ?Sized> MoveEngine for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Action, GameError> {
        (**self).choose_move(state)
    }
}

/// Lets one engine serve both seats, e.g. a single terminal.
impl<E: MoveEngine + ?Sized> MoveEngine for Rc<RefCell<E>> {
    fn name(&self) -> &'static str {
        self.borrow().name()
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Action, GameError> {
        self.borrow_mut().choose_move(state)
    }
}
