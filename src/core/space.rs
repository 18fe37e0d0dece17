//! The Sticks state space.
//!
//! - [`all_states`]: every combination of four hand values (5^4 = 625),
//!   player one to move.
//! - [`reachable_positions`]: breadth-first search over legal moves from a
//!   start position. Positions are told apart by hands *and* whose turn it
//!   is, since the same hands lead to different moves for each side.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use super::action::legal_actions;
use super::hands::HandPair;
use super::player::PlayerId;
use super::state::{GameState, StateKey};

/// Number of raw hand combinations.
pub const STATE_COUNT: usize = 625;

/// Every four-hand combination as a state with player one to move.
pub fn all_states() -> impl Iterator<Item = GameState> {
    HandPair::all().flat_map(|one| HandPair::all().map(move |two| GameState::from_hands(one, two)))
}

/// All positions reachable from `start` by legal moves, `start` included.
///
/// Terminal positions are included but not expanded.
pub fn reachable_positions(start: GameState) -> Vec<GameState> {
    let mut seen: FxHashSet<(StateKey, PlayerId)> = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut positions = Vec::new();

    seen.insert((start.key(), start.active()));
    queue.push_back(start);

    while let Some(state) = queue.pop_front() {
        positions.push(state);

        for action in legal_actions(&state) {
            let mut next = state;
            if next.play(&action).is_err() {
                continue;
            }
            if seen.insert((next.key(), next.active())) {
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(positions = positions.len(), "explored reachable positions");
    positions
}
