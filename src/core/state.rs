//! Game state.
//!
//! `GameState` is plain data: the board, throw counter, scorecard, running
//! total, flags and the two advisory messages. Only `GameEngine` mutates
//! it; callers get it by reference or as a cloned snapshot.

use serde::{Deserialize, Serialize};

use super::dice::DiceSet;
use super::scorecard::Scorecard;
use super::status::{BonusStatus, Status};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Nothing thrown yet this round.
    AwaitingFirstThrow,
    /// At least one throw taken; this many remain.
    ThrowsRemaining(u8),
    /// Every category is filled (terminal).
    AllCategoriesFilled,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Throws still available this round.
    pub throws_left: u8,

    /// The five dice.
    pub dice: DiceSet,

    /// The six scoring categories.
    pub scorecard: Scorecard,

    /// Sum of all filled categories.
    pub total_points: u32,

    /// Set once every category is filled.
    pub game_over: bool,

    /// Round number (starts at 1).
    pub round: u32,

    /// Latest advisory message.
    pub status: Status,

    /// Progress toward the bonus.
    pub bonus_status: BonusStatus,

    throws_per_round: u8,
}

impl GameState {
    /// Create the state at game start.
    ///
    /// ## Defaults
    ///
    /// - `throws_left`: `throws_per_round`
    /// - dice unrolled and unlocked
    /// - empty scorecard, zero total
    /// - `round`: 1
    #[must_use]
    pub fn new(throws_per_round: u8) -> Self {
        Self {
            throws_left: throws_per_round,
            dice: DiceSet::new(),
            scorecard: Scorecard::new(),
            total_points: 0,
            game_over: false,
            round: 1,
            status: Status::ThrowDice,
            bonus_status: BonusStatus::Unknown,
            throws_per_round,
        }
    }

    /// Throws allowed per round.
    #[must_use]
    pub fn throws_per_round(&self) -> u8 {
        self.throws_per_round
    }

    /// Check if no throw has been taken this round.
    #[must_use]
    pub fn is_round_start(&self) -> bool {
        !self.game_over && self.throws_left == self.throws_per_round
    }

    /// Current position in the round state machine.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.game_over {
            RoundPhase::AllCategoriesFilled
        } else if self.is_round_start() {
            RoundPhase::AwaitingFirstThrow
        } else {
            RoundPhase::ThrowsRemaining(self.throws_left)
        }
    }

    /// Compare everything except the advisory messages.
    ///
    /// A press rejected by the rules changes `status` only, so this is the
    /// equality to use when checking that nothing else moved.
    #[must_use]
    pub fn same_board(&self, other: &GameState) -> bool {
        self.throws_left == other.throws_left
            && self.dice == other.dice
            && self.scorecard == other.scorecard
            && self.total_points == other.total_points
            && self.game_over == other.game_over
            && self.round == other.round
            && self.bonus_status == other.bonus_status
    }

    // === Round transitions ===

    /// Close the current round after a category was scored.
    pub(crate) fn start_next_round(&mut self) {
        self.throws_left = self.throws_per_round;
        self.dice.unlock_all();
        self.round += 1;
    }

    /// Enter the terminal state.
    pub(crate) fn finish(&mut self) {
        self.game_over = true;
        self.throws_left = 0;
        self.dice.clear();
        self.status = Status::GameOver;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(super::config::NUM_THROWS)
    }
}
