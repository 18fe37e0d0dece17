//! Player identification, per-seat storage and the player's hand state.
//!
//! ## PlayerId
//!
//! Sticks is strictly two-player: `PlayerId::ONE` and `PlayerId::TWO`.
//!
//! ## PlayerPair
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A player's `HandPair` plus the two mutations an action can cause.
//! Legality is not checked here; actions reach these methods only through
//! [`Action::apply`](super::Action::apply).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::hands::{Hand, HandPair};

/// Seat of a player (0 = player one, 1 = player two).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(0);
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Seat number as shown to humans (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.index() + 1
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player #{}", self.number())
    }
}

/// One value per seat.
///
/// ```
/// use sticks::core::{PlayerId, PlayerPair};
///
/// let mut wins = PlayerPair::new(|_| 0u32);
/// wins[PlayerId::TWO] += 1;
/// assert_eq!(wins[PlayerId::ONE], 0);
/// assert_eq!(wins[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a pair from player one's and player two's values.
    pub fn from_parts(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable references to one seat and its opponent at the same time.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [one, two] = &mut self.data;
        if player == PlayerId::ONE {
            (one, two)
        } else {
            (two, one)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's hand state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub hands: HandPair,
}

impl Player {
    /// Create a player holding the given hands.
    #[must_use]
    pub const fn new(hands: HandPair) -> Self {
        Self { hands }
    }

    /// A player is defeated once both hands are dead.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.hands.is_dead()
    }

    /// Add this player's `attacker` count to `other`'s `target` hand.
    ///
    /// The target wraps to 0 at five sticks or more.
    pub fn apply_attack(&self, other: &mut Player, attacker: Hand, target: Hand) {
        other.hands.receive(target, self.hands.get(attacker));
    }

    /// Replace this player's hands verbatim.
    pub fn apply_split(&mut self, hands: HandPair) {
        self.hands = hands;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player: {}", self.hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(left: u8, right: u8) -> Player {
        Player::new(HandPair::new(left, right).unwrap())
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.number(), 2);
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
        assert_eq!(format!("{}", PlayerId::ONE), "Player #1");
    }

    #[test]
    fn test_player_pair_split_mut() {
        let mut pair = PlayerPair::from_parts(1, 2);

        let (me, them) = pair.split_mut(PlayerId::TWO);
        assert_eq!((*me, *them), (2, 1));
        *them = 10;

        assert_eq!(pair[PlayerId::ONE], 10);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair = PlayerPair::new(|p| p.number());
        let items: Vec<_> = pair.iter().collect();
        assert_eq!(items, vec![(PlayerId::ONE, &1), (PlayerId::TWO, &2)]);
    }

    #[test]
    fn test_default_player_opens_with_one_each() {
        assert_eq!(Player::default(), player(1, 1));
    }

    #[test]
    fn test_apply_attack() {
        let me = player(3, 1);
        let mut them = player(1, 1);

        me.apply_attack(&mut them, Hand::Left, Hand::Right);
        assert_eq!(them, player(1, 4));

        me.apply_attack(&mut them, Hand::Right, Hand::Right);
        assert_eq!(them, player(1, 0));
        assert!(!them.is_defeated());
    }

    #[test]
    fn test_apply_split() {
        let mut me = player(0, 4);
        me.apply_split(HandPair::new(2, 2).unwrap());
        assert_eq!(me, player(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(player(1, 2).to_string(), "Player: |    | | ");
    }
}
