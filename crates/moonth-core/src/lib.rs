//! Cyclical phase engine for the Moonth model.
//!
//! This crate owns the computation of the model: the five-phase cycle with
//! weighted transitions, multi-scale projection of durations, and the
//! bounded search that matches observed periods against those projections.
//! Everything is synchronous and side-effect-free; components are immutable
//! values built from an explicit [`KernelConstants`].
//!
//! # Modules
//!
//! - [`constants`] -- Symbolic anchors and the base-60 coherence check.
//! - [`scale`] -- [`ScaleGenerator`]: golden-ratio and sexagesimal growth.
//! - [`phase`] -- [`PhaseCycle`]: phase order, transition impedances,
//!   cycle duration, and time-driven position lookup.
//! - [`resonance`] -- [`ResonanceMatcher`]: best-fit scale index search.
//! - [`catalog`] -- Reference phenomena and unit conversion.
//! - [`principles`] -- The eleven qualitative operating principles.
//! - [`survey`] -- Matches a catalog under both families into a report.
//! - [`config`] -- Configuration loading from `moonth-config.yaml`.
//! - [`error`] -- [`MoonthError`].
//! - [`precision`] -- Fixed-precision rounding of reported values.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod phase;
pub mod precision;
pub mod principles;
pub mod resonance;
pub mod scale;
pub mod survey;

// Re-export primary types at crate root.
pub use catalog::{reference_catalog, to_hours};
pub use config::{ConfigError, MoonthConfig};
pub use constants::{ConstantName, KernelConstants};
pub use error::MoonthError;
pub use phase::PhaseCycle;
pub use principles::{OperatingPrinciple, operating_principles};
pub use resonance::ResonanceMatcher;
pub use scale::ScaleGenerator;
pub use survey::run_survey;
