//! # rust-yatzy
//!
//! A deterministic rules engine for a single-screen Yatzy-style dice game.
//!
//! ## Rules
//!
//! - Five dice, up to three throws per round.
//! - Between throws the player holds dice. Holding is by face value:
//!   pressing a die holds every die showing the same face.
//! - After the last throw the player scores one of six categories. Category
//!   `i` counts the dice showing `i + 1`, at face value.
//! - A total of 63 or more earns the bonus.
//! - The game ends when all six categories are filled.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `GameEngine` owns the whole `GameState`; nothing
//!    else mutates it.
//!
//! 2. **Rule Violations Are Data**: An out-of-turn press returns an
//!    outcome with `accepted == false` and an advisory `Status`. Only bad
//!    indices and bad configuration are `EngineError`s.
//!
//! 3. **Deterministic**: Dice come from a `DiceRoller`. `GameRng` is seeded
//!    from `GameConfig`; tests script faces with `ScriptedDice`.
//!
//! ## Modules
//!
//! - `core`: Dice, scorecard, state, actions, RNG, configuration, status
//! - `rules`: `GameEngine` and its per-operation outcomes
//! - `error`: `EngineError`
//!
//! ## Example
//!
//! ```
//! use rust_yatzy::{GameConfig, GameEngine};
//!
//! let mut engine = GameEngine::new(GameConfig::default().with_seed(3)).unwrap();
//! while engine.throws_left() > 0 {
//!     engine.throw();
//! }
//! let outcome = engine.select_category(5).unwrap();
//! assert!(outcome.accepted);
//! assert_eq!(engine.throws_left(), 3);
//! ```

pub mod core;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Face, Die, DiceSet, NUM_DICE,
    CategoryId, ScoreCategory, Scorecard, NUM_CATEGORIES,
    DiceRoller, GameRng, GameRngState, ScriptedDice,
    GameConfig, BONUS_POINTS, NUM_THROWS,
    Action, ActionRecord,
    BonusStatus, Status,
    GameState, RoundPhase,
};

pub use crate::rules::{GameEngine, Outcome, ThrowOutcome, SelectionOutcome, CategoryOutcome};

pub use crate::error::EngineError;
