//! Exhaustive move table.
//!
//! Construction walks all 625 hand combinations. For every non-terminal one
//! it draws random candidate actions (a coin flip between attack and split,
//! then random hands or random split values in `0..=4`) until one is legal,
//! and stores it. Terminal states get no entry, which leaves 576.
//!
//! Entries are keyed on the state seen from the mover's side
//! ([`GameState::perspective`]): the mover's hands first. Each entry is built
//! with player one to move, so the stored action is legal for whichever seat
//! is asking.
//!
//! The chosen action is arbitrary, not good play.

use rustc_hash::FxHashMap;

use super::MoveEngine;
use crate::core::{
    all_states, Action, GameError, GameRng, GameState, Hand, HandPair, StateKey, TableConfig,
    MAX_STICKS,
};

/// One precomputed legal action per non-terminal state.
#[derive(Clone, Debug)]
pub struct TableEngine {
    table: FxHashMap<StateKey, Action>,
}

impl TableEngine {
    /// Build the full table.
    ///
    /// Fails with `SamplingExhausted` if some state needs more than
    /// `config.max_samples` draws.
    pub fn build(config: &TableConfig) -> Result<Self, GameError> {
        let mut rng = GameRng::new(config.seed);
        let mut table = FxHashMap::default();
        let mut total_samples = 0u64;

        for state in all_states().filter(|s| !s.is_terminal()) {
            let (action, samples) = sample_legal(&state, &mut rng, config.max_samples)?;
            tracing::trace!(key = %state.perspective(), %action, samples, "table entry");
            total_samples += u64::from(samples);
            table.insert(state.perspective(), action);
        }

        tracing::info!(
            entries = table.len(),
            samples = total_samples,
            seed = config.seed,
            "built move table"
        );
        Ok(Self { table })
    }

    /// Number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Stored action for a perspective key.
    #[must_use]
    pub fn get(&self, key: &StateKey) -> Option<&Action> {
        self.table.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.table.contains_key(key)
    }

    /// Iterate over (perspective key, action) entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &Action)> {
        self.table.iter()
    }

    /// Stored action for the mover in `state`.
    ///
    /// # Panics
    ///
    /// If `state` has no entry. Every non-terminal combination of in-range
    /// hands is in the table, so a miss means the table is corrupt.
    #[must_use]
    pub fn lookup(&self, state: &GameState) -> Action {
        let key = state.perspective();
        match self.table.get(&key) {
            Some(action) => *action,
            None => panic!("state {key} is missing from the move table"),
        }
    }

    /// Encode the table with bincode. Entries are sorted by key.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        let mut entries: Vec<(StateKey, Action)> =
            self.table.iter().map(|(k, a)| (*k, *a)).collect();
        entries.sort_by_key(|(k, _)| *k);
        Ok(bincode::serialize(&entries)?)
    }

    /// Decode a table written by [`to_bytes`](Self::to_bytes).
    ///
    /// Every entry is re-checked: the key must be a non-terminal state, the
    /// action must be legal in it, and no key may appear twice. The decoded
    /// table must cover every non-terminal state, so a restored engine never
    /// misses a lookup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let entries: Vec<(StateKey, Action)> = bincode::deserialize(bytes)?;
        let mut table = FxHashMap::default();

        for (key, action) in entries {
            let state = GameState::from_key(key)?;
            if state.is_terminal() {
                return Err(GameError::Snapshot(format!("terminal state {key} in table")));
            }
            if !action.is_valid(&state) {
                return Err(GameError::Snapshot(format!("illegal {action} stored for {key}")));
            }
            if table.insert(key, action).is_some() {
                return Err(GameError::Snapshot(format!("duplicate entry for {key}")));
            }
        }

        let missing = all_states()
            .filter(|s| !s.is_terminal())
            .map(|s| s.perspective())
            .filter(|key| !table.contains_key(key))
            .count();
        if missing > 0 {
            return Err(GameError::Snapshot(format!(
                "incomplete table: {} entries, {missing} states missing",
                table.len()
            )));
        }

        tracing::debug!(entries = table.len(), "loaded move table");
        Ok(Self { table })
    }
}

impl MoveEngine for TableEngine {
    fn name(&self) -> &'static str {
        "table"
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Action, GameError> {
        if state.is_terminal() {
            return Err(GameError::GameOver);
        }
        Ok(self.lookup(state))
    }
}

/// Draw random candidates until one is legal in `state`.
///
/// Returns the action and how many draws it took.
fn sample_legal(
    state: &GameState,
    rng: &mut GameRng,
    max_samples: u32,
) -> Result<(Action, u32), GameError> {
    for samples in 1..=max_samples {
        let action = random_action(rng)?;
        if action.is_valid(state) {
            return Ok((action, samples));
        }
    }
    Err(GameError::SamplingExhausted {
        key: state.perspective(),
        samples: max_samples,
    })
}

fn random_action(rng: &mut GameRng) -> Result<Action, GameError> {
    if rng.gen_bool(0.5) {
        let attacker = random_hand(rng);
        let target = random_hand(rng);
        Ok(Action::attack(attacker, target))
    } else {
        let left = rng.gen_range(0..MAX_STICKS + 1);
        let right = rng.gen_range(0..MAX_STICKS + 1);
        Ok(Action::split(HandPair::new(left, right)?))
    }
}

fn random_hand(rng: &mut GameRng) -> Hand {
    if rng.gen_bool(0.5) {
        Hand::Right
    } else {
        Hand::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn hands(left: u8, right: u8) -> HandPair {
        HandPair::new(left, right).unwrap()
    }

    #[test]
    fn test_table_size() {
        let engine = TableEngine::build(&TableConfig::default()).unwrap();
        assert_eq!(engine.len(), 576);
        assert!(!engine.is_empty());
    }

    #[test]
    fn test_no_terminal_entries() {
        let engine = TableEngine::build(&TableConfig::default()).unwrap();
        for (key, _) in engine.iter() {
            let state = GameState::from_key(*key).unwrap();
            assert!(!state.is_terminal(), "terminal {key} in table");
        }
        assert!(!engine.contains(&StateKey::new([0, 0, 1, 1])));
        assert!(!engine.contains(&StateKey::new([2, 1, 0, 0])));
    }

    #[test]
    fn test_every_entry_is_legal() {
        let engine = TableEngine::build(&TableConfig::default()).unwrap();
        for (key, action) in engine.iter() {
            let state = GameState::from_key(*key).unwrap();
            assert!(action.is_valid(&state), "{action} illegal in {key}");
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = TableEngine::build(&TableConfig::default().with_seed(5)).unwrap();
        let b = TableEngine::build(&TableConfig::default().with_seed(5)).unwrap();
        for (key, action) in a.iter() {
            assert_eq!(b.get(key), Some(action));
        }
    }

    #[test]
    fn test_lookup_for_second_player() {
        let mut engine = TableEngine::build(&TableConfig::default()).unwrap();
        let state = GameState::from_hands(hands(0, 1), hands(3, 0)).with_active(PlayerId::TWO);

        let action = engine.choose_move(&state).unwrap();
        assert!(action.is_valid(&state));
    }

    #[test]
    fn test_choose_move_on_terminal() {
        let mut engine = TableEngine::build(&TableConfig::default()).unwrap();
        let state = GameState::from_hands(hands(0, 0), hands(1, 1));
        assert!(matches!(engine.choose_move(&state), Err(GameError::GameOver)));
    }

    #[test]
    #[should_panic(expected = "missing from the move table")]
    fn test_lookup_miss_panics() {
        let engine = TableEngine {
            table: FxHashMap::default(),
        };
        let _ = engine.lookup(&GameState::new());
    }

    #[test]
    fn test_sampling_bound() {
        // (1,0) vs (0,1): only attack L -> R is legal, so a single draw
        // usually misses.
        let state = GameState::from_hands(hands(1, 0), hands(0, 1));
        let mut rng = GameRng::new(3);
        let result = (0..50).map(|_| sample_legal(&state, &mut rng, 1)).find(Result::is_err);

        assert!(matches!(
            result,
            Some(Err(GameError::SamplingExhausted { samples: 1, .. }))
        ));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let engine = TableEngine::build(&TableConfig::default()).unwrap();
        let bytes = engine.to_bytes().unwrap();
        let restored = TableEngine::from_bytes(&bytes).unwrap();

        assert_eq!(restored.len(), engine.len());
        assert_eq!(restored.lookup(&GameState::new()), engine.lookup(&GameState::new()));
    }

    #[test]
    fn test_snapshot_rejects_illegal_entry() {
        let entries = vec![(StateKey::new([1, 1, 0, 1]), Action::attack(Hand::Left, Hand::Left))];
        let bytes = bincode::serialize(&entries).unwrap();

        assert!(matches!(
            TableEngine::from_bytes(&bytes),
            Err(GameError::Snapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_rejects_empty_table() {
        let entries: Vec<(StateKey, Action)> = Vec::new();
        let bytes = bincode::serialize(&entries).unwrap();

        match TableEngine::from_bytes(&bytes) {
            Err(GameError::Snapshot(msg)) => assert!(msg.contains("incomplete table")),
            other => panic!("expected Snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_rejects_truncated_table() {
        let engine = TableEngine::build(&TableConfig::default()).unwrap();
        let mut entries: Vec<(StateKey, Action)> = engine.iter().map(|(k, a)| (*k, *a)).collect();
        entries.sort_by_key(|(k, _)| *k);
        entries.pop();
        let bytes = bincode::serialize(&entries).unwrap();

        assert!(matches!(
            TableEngine::from_bytes(&bytes),
            Err(GameError::Snapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_rejects_duplicate_key() {
        let engine = TableEngine::build(&TableConfig::default()).unwrap();
        let mut entries: Vec<(StateKey, Action)> = engine.iter().map(|(k, a)| (*k, *a)).collect();
        entries.sort_by_key(|(k, _)| *k);
        entries.push(entries[0]);
        let bytes = bincode::serialize(&entries).unwrap();

        match TableEngine::from_bytes(&bytes) {
            Err(GameError::Snapshot(msg)) => assert!(msg.contains("duplicate entry")),
            other => panic!("expected Snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(TableEngine::from_bytes(&[0xff, 0x01]).is_err());
    }
}
