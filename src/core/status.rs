//! Advisory messages shown next to the board.
//!
//! `Status` describes the last thing that happened (or why a press was
//! ignored). `BonusStatus` tracks progress toward the bonus.

use serde::{Deserialize, Serialize};

use super::scorecard::CategoryId;

/// Result of the latest operation, as shown to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Start of a round: nothing thrown yet.
    #[default]
    ThrowDice,
    /// A throw happened; the player may hold dice and throw again.
    ThrowAgain,
    /// No throws left; a category must be picked.
    SelectPoints,
    /// A die was pressed before the first throw of the round.
    ThrowFirst,
    /// A category was picked before all throws were used.
    ThrowAllFirst { throws: u8 },
    /// The category already holds points.
    AlreadySelected(CategoryId),
    /// Every category is filled.
    GameOver,
}

impl Status {
    /// Check if this status reports an ignored press.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Status::SelectPoints
                | Status::ThrowFirst
                | Status::ThrowAllFirst { .. }
                | Status::AlreadySelected(_)
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::ThrowDice => write!(f, "Throw dices."),
            Status::ThrowAgain => write!(f, "Select and throw dices again."),
            Status::SelectPoints => write!(f, "Select your points."),
            Status::ThrowFirst => write!(f, "You have to throw dices first."),
            Status::ThrowAllFirst { throws } => {
                write!(f, "Throw {} times before setting points.", throws)
            }
            Status::AlreadySelected(id) => {
                write!(f, "You have already selected points for {}.", id)
            }
            Status::GameOver => write!(f, "Game over. All points selected."),
        }
    }
}

/// Progress toward the bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusStatus {
    /// No category scored yet this game.
    #[default]
    Unknown,
    /// Points still missing.
    Remaining(u32),
    /// Threshold reached.
    Achieved,
}

impl BonusStatus {
    /// Evaluate a total against the threshold.
    #[must_use]
    pub fn evaluate(total: u32, threshold: u32) -> Self {
        if total >= threshold {
            BonusStatus::Achieved
        } else {
            BonusStatus::Remaining(threshold - total)
        }
    }

    #[must_use]
    pub fn is_achieved(&self) -> bool {
        matches!(self, BonusStatus::Achieved)
    }
}

impl std::fmt::Display for BonusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BonusStatus::Unknown => Ok(()),
            BonusStatus::Remaining(n) => write!(f, "You are {} away from the bonus.", n),
            BonusStatus::Achieved => write!(f, "You got the bonus!"),
        }
    }
}
