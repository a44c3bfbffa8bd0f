//! Dice: faces, individual dice and the five-dice board.
//!
//! ## Face
//!
//! Type-safe face value, always within 1..=6.
//!
//! ## DiceSet
//!
//! Fixed array of exactly `NUM_DICE` dice. A die has no face until it is
//! first rolled, and loses it again when the board is cleared at game over
//! or reset.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::rng::DiceRoller;

/// Number of dice on the board.
pub const NUM_DICE: usize = 5;

/// A die face value in 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    /// Lowest face value.
    pub const MIN: u8 = 1;
    /// Highest face value.
    pub const MAX: u8 = 6;

    /// Create a face, or `None` when `value` is not in 1..=6.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Build from a value the caller already constrained to 1..=6.
    pub(crate) fn from_roll(value: u8) -> Self {
        debug_assert!(
            (Self::MIN..=Self::MAX).contains(&value),
            "face {} outside 1..=6",
            value
        );
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Get the face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all six faces in ascending order.
    pub fn all() -> impl Iterator<Item = Face> {
        (Self::MIN..=Self::MAX).map(Face)
    }
}

impl TryFrom<u8> for Face {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::new(value).ok_or_else(|| format!("die face {} is outside 1..=6", value))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One die: its current face (if rolled) and whether it is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    /// Current face. `None` until the first throw of a game.
    pub face: Option<Face>,
    /// Held dice are skipped by the next throw.
    pub locked: bool,
}

impl Die {
    /// Check whether the die shows `face`.
    #[must_use]
    pub fn shows(&self, face: Face) -> bool {
        self.face == Some(face)
    }
}

/// The five dice on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; NUM_DICE],
}

impl DiceSet {
    /// Create an unrolled, unlocked set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set showing the given faces, all unlocked.
    ///
    /// Returns `None` if any value is outside 1..=6.
    #[must_use]
    pub fn from_faces(values: [u8; NUM_DICE]) -> Option<Self> {
        let mut set = Self::new();
        for (die, value) in set.dice.iter_mut().zip(values) {
            die.face = Some(Face::new(value)?);
        }
        Some(set)
    }

    /// Reroll every unlocked die. Locked dice keep their face.
    ///
    /// Returns how many dice were rolled.
    pub fn roll_unlocked(&mut self, roller: &mut impl DiceRoller) -> usize {
        let mut rolled = 0;
        for die in self.dice.iter_mut().filter(|d| !d.locked) {
            die.face = Some(roller.roll_face());
            rolled += 1;
        }
        rolled
    }

    /// Lock exactly the dice showing `face`; unlock the rest.
    pub fn lock_matching(&mut self, face: Face) {
        for die in &mut self.dice {
            die.locked = die.shows(face);
        }
    }

    /// Release every lock.
    pub fn unlock_all(&mut self) {
        for die in &mut self.dice {
            die.locked = false;
        }
    }

    /// Remove all faces and locks.
    pub fn clear(&mut self) {
        self.dice = [Die::default(); NUM_DICE];
    }

    /// Faces in board order.
    #[must_use]
    pub fn faces(&self) -> [Option<Face>; NUM_DICE] {
        self.dice.map(|d| d.face)
    }

    /// Lock flags in board order.
    #[must_use]
    pub fn locked_flags(&self) -> [bool; NUM_DICE] {
        self.dice.map(|d| d.locked)
    }

    /// Check whether every die has been rolled.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.dice.iter().all(|d| d.face.is_some())
    }

    /// Number of dice showing `face`.
    #[must_use]
    pub fn count(&self, face: Face) -> usize {
        self.dice.iter().filter(|d| d.shows(face)).count()
    }

    /// Iterate over the dice in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }
}

impl Index<usize> for DiceSet {
    type Output = Die;

    fn index(&self, index: usize) -> &Die {
        &self.dice[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;

    #[test]
    fn test_face_range() {
        assert!(Face::new(0).is_none());
        assert!(Face::new(7).is_none());
        assert_eq!(Face::new(4).map(Face::value), Some(4));
        assert_eq!(Face::all().count(), 6);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 1..=6")]
    fn test_from_roll_flags_out_of_range() {
        let _ = Face::from_roll(9);
    }

    #[test]
    fn test_face_serde_rejects_out_of_range() {
        let face: Face = serde_json::from_str("5").unwrap();
        assert_eq!(face.value(), 5);
        assert!(serde_json::from_str::<Face>("9").is_err());
    }

    #[test]
    fn test_new_set_is_unrolled() {
        let set = DiceSet::new();
        assert!(!set.is_rolled());
        assert_eq!(set.faces(), [None; NUM_DICE]);
        assert_eq!(set.locked_flags(), [false; NUM_DICE]);
    }

    #[test]
    fn test_roll_skips_locked() {
        let mut set = DiceSet::from_faces([2, 2, 4, 5, 6]).unwrap();
        set.lock_matching(Face::new(2).unwrap());

        let mut roller = ScriptedDice::new(&[1]).unwrap();
        let rolled = set.roll_unlocked(&mut roller);

        assert_eq!(rolled, 3);
        let values: Vec<_> = set.faces().iter().map(|f| f.unwrap().value()).collect();
        assert_eq!(values, vec![2, 2, 1, 1, 1]);
        assert_eq!(set.locked_flags(), [true, true, false, false, false]);
    }

    #[test]
    fn test_lock_matching_replaces_previous_locks() {
        let mut set = DiceSet::from_faces([3, 5, 3, 5, 1]).unwrap();
        set.lock_matching(Face::new(3).unwrap());
        assert_eq!(set.locked_flags(), [true, false, true, false, false]);

        set.lock_matching(Face::new(5).unwrap());
        assert_eq!(set.locked_flags(), [false, true, false, true, false]);
    }

    #[test]
    fn test_count_and_clear() {
        let mut set = DiceSet::from_faces([6, 6, 6, 1, 6]).unwrap();
        assert_eq!(set.count(Face::new(6).unwrap()), 4);
        assert_eq!(set.count(Face::new(2).unwrap()), 0);

        set.lock_matching(Face::new(1).unwrap());
        set.clear();
        assert_eq!(set, DiceSet::new());
    }

    #[test]
    fn test_from_faces_validates() {
        assert!(DiceSet::from_faces([1, 2, 3, 4, 7]).is_none());
    }
}
