//! Actions: the two move kinds and their legality.
//!
//! - `Attack { attacker, target }`: add the active player's `attacker` hand to
//!   the other player's `target` hand. Both hands must be alive.
//! - `Split { hands }`: redistribute the active player's own sticks. The
//!   total must be kept, and the result must differ from the current hands
//!   as an unordered pair, so `(2,3) -> (3,2)` is not a move.
//!
//! [`Action::apply`] is the only place hand values change. It validates
//! first and mutates nothing when the action is illegal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;
use super::hands::{Hand, HandPair, MAX_STICKS};
use super::player::PlayerId;
use super::state::GameState;

/// A move by the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Hit the other player's `target` hand with the active player's `attacker` hand.
    Attack { attacker: Hand, target: Hand },
    /// Rearrange the active player's sticks into `hands`.
    Split { hands: HandPair },
}

/// Discriminant of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    Split,
}

/// Legal actions for one state. No state has more than eight.
pub type ActionList = SmallVec<[Action; 8]>;

impl Action {
    #[must_use]
    pub const fn attack(attacker: Hand, target: Hand) -> Self {
        Action::Attack { attacker, target }
    }

    #[must_use]
    pub const fn split(hands: HandPair) -> Self {
        Action::Split { hands }
    }

    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Attack { .. } => ActionKind::Attack,
            Action::Split { .. } => ActionKind::Split,
        }
    }

    /// Whether the active player of `state` may make this move.
    ///
    /// Does not look at whether the game is over; [`apply`](Self::apply)
    /// rejects terminal states separately.
    #[must_use]
    pub fn is_valid(&self, state: &GameState) -> bool {
        self.check(state).is_ok()
    }

    /// Validate and perform this action for the active player of `state`.
    ///
    /// Does not pass the turn; see [`GameState::play`].
    pub fn apply(&self, state: &mut GameState) -> Result<(), GameError> {
        if state.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.check(state)
            .map_err(|reason| GameError::InvalidAction { action: *self, reason })?;

        let (me, them) = state.players_mut();
        match *self {
            Action::Attack { attacker, target } => me.apply_attack(them, attacker, target),
            Action::Split { hands } => me.apply_split(hands),
        }
        Ok(())
    }

    fn check(&self, state: &GameState) -> Result<(), &'static str> {
        let mine = state.active_player().hands;
        match *self {
            Action::Attack { attacker, target } => {
                if !mine.is_alive(attacker) {
                    return Err("attacking hand is dead");
                }
                if !state.other_player().hands.is_alive(target) {
                    return Err("target hand is dead");
                }
                Ok(())
            }
            Action::Split { hands } => {
                // HandPair already caps each hand at MAX_STICKS.
                if hands.total() != mine.total() {
                    return Err("split must keep the same number of sticks");
                }
                if hands.same_arrangement(mine) {
                    return Err("split must change the hands");
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Attack { attacker, target } => write!(f, "attack {attacker} -> {target}"),
            Action::Split { hands } => write!(f, "split to ({},{})", hands.left(), hands.right()),
        }
    }
}

/// Every legal action for the active player of `state`.
///
/// Attacks come first in (attacker, target) order, then splits by ascending
/// left hand. Empty once the game is over.
pub fn legal_actions(state: &GameState) -> ActionList {
    let mut actions = ActionList::new();
    if state.is_terminal() {
        return actions;
    }

    for attacker in Hand::BOTH {
        for target in Hand::BOTH {
            let action = Action::attack(attacker, target);
            if action.is_valid(state) {
                actions.push(action);
            }
        }
    }

    let total = state.active_player().hands.total();
    for left in 0..=MAX_STICKS.min(total) {
        let Ok(hands) = HandPair::new(left, total - left) else {
            continue;
        };
        let action = Action::split(hands);
        if action.is_valid(state) {
            actions.push(action);
        }
    }

    actions
}

/// A move made during a game, for the in-memory move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number, starting at 1.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(left: u8, right: u8) -> HandPair {
        HandPair::new(left, right).unwrap()
    }

    fn state(one: (u8, u8), two: (u8, u8)) -> GameState {
        GameState::from_hands(hands(one.0, one.1), hands(two.0, two.1))
    }

    #[test]
    fn test_attack_validity() {
        let s = state((1, 0), (0, 3));
        assert!(Action::attack(Hand::Left, Hand::Right).is_valid(&s));
        assert!(!Action::attack(Hand::Right, Hand::Right).is_valid(&s));
        assert!(!Action::attack(Hand::Left, Hand::Left).is_valid(&s));
    }

    #[test]
    fn test_attack_uses_active_player() {
        let s = state((1, 0), (0, 3)).with_active(PlayerId::TWO);
        assert!(Action::attack(Hand::Right, Hand::Left).is_valid(&s));
        assert!(!Action::attack(Hand::Left, Hand::Left).is_valid(&s));
    }

    #[test]
    fn test_split_validity() {
        let s = state((2, 3), (1, 1));
        assert!(Action::split(hands(1, 4)).is_valid(&s));
        assert!(Action::split(hands(4, 1)).is_valid(&s));
        assert!(!Action::split(hands(3, 2)).is_valid(&s));
        assert!(!Action::split(hands(2, 3)).is_valid(&s));
        assert!(!Action::split(hands(2, 2)).is_valid(&s));
    }

    #[test]
    fn test_split_mirror_rejected() {
        let s = state((0, 4), (1, 1));
        assert!(!Action::split(hands(4, 0)).is_valid(&s));
        assert!(Action::split(hands(2, 2)).is_valid(&s));
    }

    #[test]
    fn test_apply_attack() {
        let mut s = state((3, 2), (2, 4));
        Action::attack(Hand::Left, Hand::Left).apply(&mut s).unwrap();
        assert_eq!(s.player(PlayerId::TWO).hands, hands(0, 4));

        Action::attack(Hand::Right, Hand::Right).apply(&mut s).unwrap();
        assert_eq!(s.player(PlayerId::TWO).hands, hands(0, 0));
        assert!(s.is_terminal());
    }

    #[test]
    fn test_apply_rejects_without_mutation() {
        let mut s = state((0, 2), (1, 1));
        let before = s.key();

        let err = Action::attack(Hand::Left, Hand::Left).apply(&mut s).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidAction { reason: "attacking hand is dead", .. }
        ));
        assert_eq!(s.key(), before);
    }

    #[test]
    fn test_apply_rejects_terminal() {
        let mut s = state((1, 1), (0, 0));
        let err = Action::attack(Hand::Left, Hand::Left).apply(&mut s).unwrap_err();
        assert!(matches!(err, GameError::GameOver));
    }

    #[test]
    fn test_legal_actions_opening() {
        let actions = legal_actions(&GameState::new());

        // 4 attacks, plus (0,2) and (2,0)
        assert_eq!(actions.len(), 6);
        assert_eq!(actions[0], Action::attack(Hand::Left, Hand::Left));
        assert_eq!(actions[4], Action::split(hands(0, 2)));
        assert_eq!(actions[5], Action::split(hands(2, 0)));
    }

    #[test]
    fn test_legal_actions_all_valid() {
        for one in HandPair::all() {
            for two in HandPair::all() {
                let s = GameState::from_hands(one, two);
                for action in legal_actions(&s) {
                    assert!(action.is_valid(&s), "{action} in {}", s.key());
                }
            }
        }
    }

    #[test]
    fn test_legal_actions_terminal_empty() {
        assert!(legal_actions(&state((0, 0), (3, 3))).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::attack(Hand::Right, Hand::Left).to_string(), "attack R -> L");
        assert_eq!(Action::split(hands(1, 3)).to_string(), "split to (1,3)");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::split(hands(0, 3));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
