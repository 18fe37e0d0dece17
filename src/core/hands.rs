//! Hands and hand pairs.
//!
//! ## Hand
//!
//! Selector for one of a player's two hands. `Left` is index 0,
//! `Right` is index 1.
//!
//! ## HandPair
//!
//! Small `Copy` value holding the stick count of both hands. Every value is
//! kept in `0..=MAX_STICKS`; a count of zero marks a dead hand.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::GameError;

/// Most sticks a live hand can hold.
pub const MAX_STICKS: u8 = 4;

/// Count at which an attacked hand wraps to dead.
pub const DEAD_AT: u8 = MAX_STICKS + 1;

/// One of a player's two hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Both hands in index order.
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Get the hand index (0 for left, 1 for right).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    /// Hand for a raw index, if it is 0 or 1.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Hand> {
        match index {
            0 => Some(Hand::Left),
            1 => Some(Hand::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Left => write!(f, "L"),
            Hand::Right => write!(f, "R"),
        }
    }
}

/// Stick counts on a player's left and right hand.
///
/// ```
/// use sticks::core::{Hand, HandPair};
///
/// let hands = HandPair::new(2, 3).unwrap();
/// assert_eq!(hands[Hand::Right], 3);
/// assert_eq!(hands.total(), 5);
/// assert!(HandPair::new(5, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct HandPair([u8; 2]);

impl HandPair {
    /// Starting hands: one stick on each.
    pub const OPENING: HandPair = HandPair([1, 1]);

    /// Both hands dead.
    pub const DEAD: HandPair = HandPair([0, 0]);

    /// Create a hand pair, rejecting counts above `MAX_STICKS`.
    pub fn new(left: u8, right: u8) -> Result<Self, GameError> {
        for value in [left, right] {
            if value > MAX_STICKS {
                return Err(GameError::HandOutOfRange { value });
            }
        }
        Ok(Self([left, right]))
    }

    /// Iterate over all 25 pairs in `0..=4 x 0..=4`, left-major.
    pub fn all() -> impl Iterator<Item = HandPair> {
        (0..=MAX_STICKS).flat_map(|left| (0..=MAX_STICKS).map(move |right| HandPair([left, right])))
    }

    #[must_use]
    pub const fn left(self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub const fn right(self) -> u8 {
        self.0[1]
    }

    /// Stick count on a hand.
    #[must_use]
    pub const fn get(self, hand: Hand) -> u8 {
        self.0[hand.index()]
    }

    /// Whether a hand still holds sticks.
    #[must_use]
    pub const fn is_alive(self, hand: Hand) -> bool {
        self.get(hand) > 0
    }

    /// Whether both hands are dead.
    #[must_use]
    pub const fn is_dead(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Total sticks over both hands.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.0[0] + self.0[1]
    }

    /// Counts in ascending order, ignoring which hand holds which.
    #[must_use]
    pub fn sorted(self) -> [u8; 2] {
        let [a, b] = self.0;
        if a <= b {
            [a, b]
        } else {
            [b, a]
        }
    }

    /// True when both pairs hold the same counts as an unordered pair.
    ///
    /// `(2,3)` and `(3,2)` are the same arrangement.
    #[must_use]
    pub fn same_arrangement(self, other: HandPair) -> bool {
        self.sorted() == other.sorted()
    }

    /// Add `sticks` to a hand, killing it when the result reaches `DEAD_AT`.
    pub fn receive(&mut self, hand: Hand, sticks: u8) {
        let total = self.0[hand.index()].saturating_add(sticks);
        self.0[hand.index()] = if total >= DEAD_AT { 0 } else { total };
    }

    /// Raw counts as `[left, right]`.
    #[must_use]
    pub const fn to_array(self) -> [u8; 2] {
        self.0
    }
}

impl Default for HandPair {
    fn default() -> Self {
        Self::OPENING
    }
}

impl Index<Hand> for HandPair {
    type Output = u8;

    fn index(&self, hand: Hand) -> &Self::Output {
        &self.0[hand.index()]
    }
}

impl TryFrom<[u8; 2]> for HandPair {
    type Error = GameError;

    fn try_from(value: [u8; 2]) -> Result<Self, Self::Error> {
        HandPair::new(value[0], value[1])
    }
}

impl From<HandPair> for [u8; 2] {
    fn from(hands: HandPair) -> Self {
        hands.0
    }
}

impl std::fmt::Display for HandPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}   {}",
            "| ".repeat(self.left() as usize),
            "| ".repeat(self.right() as usize)
        )
    }
}
