//! Enumeration types for the Moonth cycle model.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// One of the five phases of the cycle, in their fixed order.
///
/// The order is invariant: each phase is always followed by the next one,
/// and [`Phase::Integration`] wraps around to [`Phase::Opening`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Phase {
    /// First phase: the cycle opens.
    Opening,
    /// Second phase: activity rises.
    Rise,
    /// Third phase: peak expansion.
    Expansion,
    /// Fourth phase: activity descends.
    Descent,
    /// Fifth phase: consolidation before the next cycle.
    Integration,
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

/// Geometric growth rule used to project a base duration across scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ScalingFamily {
    /// Multiply by the golden ratio per step.
    PhiGrowth,
    /// Multiply by 60 per step.
    SexagesimalGrowth,
}

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// Unit in which an observed phenomenon's value is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TimeUnit {
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days of 24 hours.
    Days,
    /// Julian years of 365.25 days.
    Years,
}
