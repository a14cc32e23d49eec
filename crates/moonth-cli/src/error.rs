//! Error types for the `moonth` binary.
//!
//! [`CliError`] wraps every failure mode during startup and the survey run.

/// Top-level error for the `moonth` binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: moonth_core::ConfigError,
    },

    /// The engine rejected the model or an input.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: moonth_core::MoonthError,
    },

    /// The report could not be serialized.
    #[error("report serialization failed: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
