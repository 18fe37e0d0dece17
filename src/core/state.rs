//! Game state: both players plus whose turn it is.
//!
//! ## Identity
//!
//! Two `GameState`s are equal (and hash equally) when all four hand values
//! match in player order. The active seat is not part of identity, so states
//! that differ only by whose turn it is collapse into one.
//!
//! ## StateKey
//!
//! `StateKey` is the immutable four-byte snapshot used wherever a state has
//! to be stored or looked up. Lookup tables key on this value, never on a
//! live `GameState`.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::action::Action;
use super::error::GameError;
use super::hands::HandPair;
use super::player::{Player, PlayerId, PlayerPair};

/// Four hand values: two for the first listed player, two for the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey([u8; 4]);

impl StateKey {
    #[must_use]
    pub const fn new(hands: [u8; 4]) -> Self {
        Self(hands)
    }

    /// Key of two hand pairs, first pair first.
    #[must_use]
    pub const fn from_pairs(first: HandPair, second: HandPair) -> Self {
        Self([first.left(), first.right(), second.left(), second.right()])
    }

    /// Raw hand values.
    #[must_use]
    pub const fn hands(self) -> [u8; 4] {
        self.0
    }

    /// Split back into the two hand pairs.
    ///
    /// Fails if any value is out of range.
    pub fn pairs(self) -> Result<(HandPair, HandPair), GameError> {
        let [a, b, c, d] = self.0;
        Ok((HandPair::new(a, b)?, HandPair::new(c, d)?))
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "({a},{b}|{c},{d})")
    }
}

/// Complete state of one Sticks game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerPair<Player>,
    active: PlayerId,
}

impl GameState {
    /// Opening position: both players at (1,1), player one to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_hands(HandPair::OPENING, HandPair::OPENING)
    }

    /// State with the given hands, player one to move.
    #[must_use]
    pub fn from_hands(one: HandPair, two: HandPair) -> Self {
        Self {
            players: PlayerPair::from_parts(Player::new(one), Player::new(two)),
            active: PlayerId::ONE,
        }
    }

    /// State with player one's hands first in `key`, player one to move.
    pub fn from_key(key: StateKey) -> Result<Self, GameError> {
        let (one, two) = key.pairs()?;
        Ok(Self::from_hands(one, two))
    }

    /// Set the player to move.
    #[must_use]
    pub fn with_active(mut self, active: PlayerId) -> Self {
        self.active = active;
        self
    }

    // === Accessors ===

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn other(&self) -> PlayerId {
        self.active.opponent()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[must_use]
    pub fn other_player(&self) -> &Player {
        &self.players[self.other()]
    }

    /// Mutable active and other player, in that order.
    pub(crate) fn players_mut(&mut self) -> (&mut Player, &mut Player) {
        self.players.split_mut(self.active)
    }

    /// Both players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    // === Identity ===

    /// Hands in seat order. Ignores whose turn it is.
    #[must_use]
    pub fn key(&self) -> StateKey {
        StateKey::from_pairs(self.players[PlayerId::ONE].hands, self.players[PlayerId::TWO].hands)
    }

    /// Hands with the player to move listed first.
    #[must_use]
    pub fn perspective(&self) -> StateKey {
        StateKey::from_pairs(self.active_player().hands, self.other_player().hands)
    }

    /// Total sticks held by both players.
    #[must_use]
    pub fn total_sticks(&self) -> u8 {
        self.players.iter().map(|(_, p)| p.hands.total()).sum()
    }

    // === Turn flow ===

    /// Pass the turn to the other player.
    pub fn swap_active(&mut self) {
        self.active = self.active.opponent();
    }

    /// The game ends once either player has both hands dead.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.players.iter().any(|(_, p)| p.is_defeated())
    }

    /// The player who still has a live hand.
    ///
    /// Only defined for terminal states; returns `NotFinished` otherwise.
    pub fn winner(&self) -> Result<PlayerId, GameError> {
        if !self.is_terminal() {
            return Err(GameError::NotFinished);
        }
        self.players
            .iter()
            .find(|(_, p)| !p.is_defeated())
            .map(|(id, _)| id)
            .ok_or(GameError::NotFinished)
    }

    /// Apply `action` for the active player, then pass the turn.
    ///
    /// An illegal action leaves the state untouched and keeps the turn.
    pub fn play(&mut self, action: &Action) -> Result<(), GameError> {
        action.apply(self)?;
        self.swap_active();
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game:\n1: {}\n2: {}",
            self.players[PlayerId::ONE],
            self.players[PlayerId::TWO]
        )
    }
}
