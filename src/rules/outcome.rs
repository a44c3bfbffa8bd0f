//! Per-operation results handed to the presentation layer.
//!
//! Each engine operation returns the slice of state its caller redraws,
//! plus whether the rules accepted the press. A rejected press leaves
//! everything but `status` as it was.

use serde::{Deserialize, Serialize};

use crate::core::{BonusStatus, DiceSet, GameState, Scorecard, Status, NUM_DICE};

/// Result of `GameEngine::throw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowOutcome {
    pub accepted: bool,
    pub dice: DiceSet,
    pub throws_left: u8,
    pub status: Status,
}

impl ThrowOutcome {
    pub(crate) fn capture(state: &GameState, accepted: bool) -> Self {
        Self {
            accepted,
            dice: state.dice,
            throws_left: state.throws_left,
            status: state.status,
        }
    }
}

/// Result of `GameEngine::toggle_die_selection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    pub accepted: bool,
    pub locked: [bool; NUM_DICE],
    pub status: Status,
}

impl SelectionOutcome {
    pub(crate) fn capture(state: &GameState, accepted: bool) -> Self {
        Self {
            accepted,
            locked: state.dice.locked_flags(),
            status: state.status,
        }
    }
}

/// Result of `GameEngine::select_category`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub accepted: bool,
    pub categories: Scorecard,
    pub total_points: u32,
    pub bonus_status: BonusStatus,
    pub game_over: bool,
    pub status: Status,
}

impl CategoryOutcome {
    pub(crate) fn capture(state: &GameState, accepted: bool) -> Self {
        Self {
            accepted,
            categories: state.scorecard,
            total_points: state.total_points,
            bonus_status: state.bonus_status,
            game_over: state.game_over,
            status: state.status,
        }
    }
}

/// Result of `GameEngine::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Throw(ThrowOutcome),
    Selection(SelectionOutcome),
    Category(CategoryOutcome),
    Reset(GameState),
}

impl Outcome {
    /// Status reported by the operation.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Outcome::Throw(o) => o.status,
            Outcome::Selection(o) => o.status,
            Outcome::Category(o) => o.status,
            Outcome::Reset(state) => state.status,
        }
    }

    /// Check if the rules accepted the action.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        match self {
            Outcome::Throw(o) => o.accepted,
            Outcome::Selection(o) => o.accepted,
            Outcome::Category(o) => o.accepted,
            Outcome::Reset(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fresh_state() {
        let state = GameState::default();

        let throw = ThrowOutcome::capture(&state, true);
        assert_eq!(throw.throws_left, 3);
        assert_eq!(throw.status, Status::ThrowDice);

        let selection = SelectionOutcome::capture(&state, false);
        assert_eq!(selection.locked, [false; NUM_DICE]);
        assert!(!selection.accepted);

        let category = CategoryOutcome::capture(&state, false);
        assert_eq!(category.total_points, 0);
        assert!(!category.game_over);
    }

    #[test]
    fn test_outcome_status() {
        let mut state = GameState::default();
        state.status = Status::ThrowFirst;

        let outcome = Outcome::Selection(SelectionOutcome::capture(&state, false));
        assert_eq!(outcome.status(), Status::ThrowFirst);
        assert!(!outcome.is_accepted());

        let reset = Outcome::Reset(GameState::default());
        assert!(reset.is_accepted());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = Outcome::Category(CategoryOutcome::capture(&GameState::default(), true));

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, deserialized);
    }
}
