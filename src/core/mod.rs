//! Core game types: dice, scorecard, state, actions, RNG, configuration.
//!
//! These are plain data with small invariant-keeping helpers. The rules
//! that tie them together live in `rules`.

pub mod dice;
pub mod scorecard;
pub mod rng;
pub mod config;
pub mod action;
pub mod status;
pub mod state;

pub use dice::{Face, Die, DiceSet, NUM_DICE};
pub use scorecard::{CategoryId, ScoreCategory, Scorecard, NUM_CATEGORIES};
pub use rng::{DiceRoller, GameRng, GameRngState, ScriptedDice};
pub use config::{GameConfig, BONUS_POINTS, NUM_THROWS};
pub use action::{Action, ActionRecord};
pub use status::{BonusStatus, Status};
pub use state::{GameState, RoundPhase};
