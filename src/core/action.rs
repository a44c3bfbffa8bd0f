//! Player actions and action history.
//!
//! Every press in the game maps to one `Action`. The engine records each
//! applied action as an `ActionRecord`, which is enough to replay a game
//! from its seed.

use serde::{Deserialize, Serialize};

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll every unlocked die.
    Throw,
    /// Press the die at this board index.
    ToggleDie(usize),
    /// Score the category at this index.
    SelectCategory(usize),
    /// Start a new game.
    Reset,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Throw => write!(f, "Throw"),
            Action::ToggleDie(i) => write!(f, "ToggleDie({})", i),
            Action::SelectCategory(i) => write!(f, "SelectCategory({})", i),
            Action::Reset => write!(f, "Reset"),
        }
    }
}

/// A recorded action with ordering metadata.
///
/// Used for:
/// - Replay/debugging
/// - Tests asserting on what was accepted
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken (starts at 1).
    pub round: u32,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, round: u32, sequence: u32) -> Self {
        Self {
            action,
            round,
            sequence,
        }
    }
}
