//! Scoring categories.
//!
//! The ruleset has six categories, one per face value. Category `i`
//! (0-based) scores the dice showing face `i + 1`, at face value.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::dice::{DiceSet, Face};

/// Number of scoring categories.
pub const NUM_CATEGORIES: usize = 6;

/// Category identifier, 0..6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CategoryId(u8);

impl CategoryId {
    /// Create a category ID, or `None` when `index >= NUM_CATEGORIES`.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < NUM_CATEGORIES).then_some(Self(index as u8))
    }

    /// Get the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The face value this category counts.
    #[must_use]
    pub fn face(self) -> Face {
        Face::from_roll(self.0 + 1)
    }

    /// Iterate over all category IDs.
    pub fn all() -> impl Iterator<Item = CategoryId> {
        (0..NUM_CATEGORIES as u8).map(CategoryId)
    }

    /// Points the dice would score in this category.
    #[must_use]
    pub fn score(self, dice: &DiceSet) -> u32 {
        let face = self.face();
        dice.count(face) as u32 * u32::from(face.value())
    }
}

impl TryFrom<u8> for CategoryId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CategoryId::new(usize::from(value))
            .ok_or_else(|| format!("category {} is outside 0..{}", value, NUM_CATEGORIES))
    }
}

impl From<CategoryId> for u8 {
    fn from(id: CategoryId) -> u8 {
        id.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.face())
    }
}

/// One scoring slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreCategory {
    pub filled: bool,
    pub points: u32,
}

/// All six categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scorecard {
    categories: [ScoreCategory; NUM_CATEGORIES],
}

impl Scorecard {
    /// Create an empty scorecard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a category.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> &ScoreCategory {
        &self.categories[id.index()]
    }

    /// Check if a category has been filled.
    #[must_use]
    pub fn is_filled(&self, id: CategoryId) -> bool {
        self.categories[id.index()].filled
    }

    /// Fill a category. Returns `false` (and changes nothing) if it was
    /// already filled.
    pub fn fill(&mut self, id: CategoryId, points: u32) -> bool {
        let slot = &mut self.categories[id.index()];
        if slot.filled {
            return false;
        }
        slot.filled = true;
        slot.points = points;
        true
    }

    /// Check if every category has been filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.categories.iter().all(|c| c.filled)
    }

    /// Number of filled categories.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.categories.iter().filter(|c| c.filled).count()
    }

    /// Sum of points over filled categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.categories.iter().filter(|c| c.filled).map(|c| c.points).sum()
    }

    /// Categories still open, in index order.
    pub fn open(&self) -> impl Iterator<Item = CategoryId> + '_ {
        CategoryId::all().filter(|&id| !self.is_filled(id))
    }

    /// Iterate over categories in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreCategory> {
        self.categories.iter()
    }
}

impl Index<CategoryId> for Scorecard {
    type Output = ScoreCategory;

    fn index(&self, id: CategoryId) -> &ScoreCategory {
        &self.categories[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(index: usize) -> CategoryId {
        CategoryId::new(index).unwrap()
    }

    #[test]
    fn test_category_bounds() {
        assert!(CategoryId::new(5).is_some());
        assert!(CategoryId::new(6).is_none());
        assert_eq!(cat(0).face().value(), 1);
        assert_eq!(cat(5).face().value(), 6);
        assert_eq!(cat(2).to_string(), "3");
    }

    #[test]
    fn test_category_serde_rejects_out_of_range() {
        let id: CategoryId = serde_json::from_str("5").unwrap();
        assert_eq!(id, cat(5));
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
        assert!(serde_json::from_str::<CategoryId>("6").is_err());
        assert!(serde_json::from_str::<CategoryId>("9").is_err());
    }

    #[test]
    fn test_scorecard_serde_keeps_categories() {
        let mut card = Scorecard::new();
        card.fill(cat(3), 12);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Scorecard = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, card);
        assert_eq!(deserialized[cat(3)].points, 12);
    }

    #[test]
    fn test_score_counts_matching_faces_only() {
        let dice = DiceSet::from_faces([3, 3, 3, 5, 6]).unwrap();

        assert_eq!(cat(2).score(&dice), 9);
        assert_eq!(cat(4).score(&dice), 5);
        assert_eq!(cat(5).score(&dice), 6);
        assert_eq!(cat(0).score(&dice), 0);
    }

    #[test]
    fn test_score_unrolled_is_zero() {
        let dice = DiceSet::new();
        assert!(CategoryId::all().all(|c| c.score(&dice) == 0));
    }

    #[test]
    fn test_fill_once() {
        let mut card = Scorecard::new();

        assert!(card.fill(cat(1), 8));
        assert!(!card.fill(cat(1), 2));
        assert_eq!(card[cat(1)].points, 8);
        assert!(card.is_filled(cat(1)));
        assert_eq!(card.filled_count(), 1);
    }

    #[test]
    fn test_total_and_complete() {
        let mut card = Scorecard::new();
        for id in CategoryId::all() {
            assert!(!card.is_complete());
            card.fill(id, id.face().value() as u32 * 3);
        }

        assert!(card.is_complete());
        assert_eq!(card.total(), 63);
        assert_eq!(card.open().count(), 0);
    }
}
