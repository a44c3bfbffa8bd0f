//! Game rules.
//!
//! `GameEngine` owns a `GameState` and applies every transition:
//! - Which presses are accepted in the current round
//! - How dice are held and rolled
//! - How a category is scored, and when the game ends
//!
//! Rule violations come back as outcomes with `accepted == false`, never
//! as errors.

pub mod engine;
pub mod outcome;

pub use engine::GameEngine;
pub use outcome::{CategoryOutcome, Outcome, SelectionOutcome, ThrowOutcome};
