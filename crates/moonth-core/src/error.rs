//! Error types for the `moonth-core` crate.
//!
//! Every failure is a local validation failure on malformed input. None are
//! transient, so nothing here is retried; the caller decides what to do.

use moonth_types::Phase;

/// Errors returned by the engine's operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoonthError {
    /// The requested constant name is not a registered anchor.
    #[error("unknown constant: {0}")]
    UnknownConstant(String),

    /// A base duration must be positive and finite.
    #[error("invalid base duration: {0} hours (must be positive and finite)")]
    InvalidBase(f64),

    /// The phase pair is not one of the five cyclic-adjacent transitions.
    #[error("undefined transition from {from:?} to {to:?}")]
    UndefinedTransition {
        /// Phase being left.
        from: Phase,
        /// Phase being entered.
        to: Phase,
    },

    /// An observed duration must be positive and finite.
    #[error("invalid observation: {0} hours (must be positive and finite)")]
    InvalidObservation(f64),

    /// The scale-index search bound is negative.
    #[error("empty search range: bound {0} is negative")]
    EmptySearchRange(i32),

    /// The phase model (quantum or transition table) is inconsistent.
    #[error("invalid phase model: {reason}")]
    InvalidModel {
        /// Explanation of what is wrong with the model.
        reason: String,
    },
}
