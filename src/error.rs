//! Engine errors.
//!
//! Only caller mistakes are errors. Moves that break a game rule (throwing
//! with no throws left, scoring too early) are reported through
//! `Status` instead and leave the state untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid argument: {name} index {index} is out of range 0..{limit}")]
    InvalidArgument {
        name: &'static str,
        index: usize,
        limit: usize,
    },
    #[error("invalid config: {msg}")]
    InvalidConfig { msg: String },
}

impl EngineError {
    pub(crate) fn die_index(index: usize) -> Self {
        EngineError::InvalidArgument {
            name: "die",
            index,
            limit: crate::core::NUM_DICE,
        }
    }

    pub(crate) fn category_index(index: usize) -> Self {
        EngineError::InvalidArgument {
            name: "category",
            index,
            limit: crate::core::NUM_CATEGORIES,
        }
    }
}
