//! Record types produced and consumed by the Moonth engine.
//!
//! Every record here is a plain value: computed fresh per query, never
//! cached, and safe to serialize into reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Phase, ScalingFamily, TimeUnit};
use crate::ids::SurveyId;

// ---------------------------------------------------------------------------
// Constants diagnostics
// ---------------------------------------------------------------------------

/// Result of comparing `alpha^-1 * phi^2 / 6` against the base-60 reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CoherenceReport {
    /// Human-readable form of the computed expression.
    pub expression: String,
    /// Computed value, rounded to 4 decimal digits.
    pub computed_value: f64,
    /// The literal reference value (60).
    pub reference_value: f64,
    /// Signed relative error `(computed - reference) / reference`, rounded to
    /// 4 decimal digits.
    pub relative_error: f64,
}

// ---------------------------------------------------------------------------
// Scale projection
// ---------------------------------------------------------------------------

/// A base duration projected to scale index `n` under a scaling family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScaleProjection {
    /// Scaling family used for the projection.
    pub family: ScalingFamily,
    /// Scale index (negative for contraction, zero for identity).
    pub n: i32,
    /// Projected duration in hours.
    pub hours: f64,
    /// Projected duration in 24-hour days.
    pub days: f64,
    /// Projected duration in Julian years (365.25 days).
    pub years: f64,
}

// ---------------------------------------------------------------------------
// Phase cycle
// ---------------------------------------------------------------------------

/// Total realized duration of one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CycleDuration {
    /// Five phase quanta plus every transition impedance, in hours.
    pub total_hours: f64,
    /// `total_hours / 24`, rounded to 2 decimal digits.
    pub total_days: f64,
    /// Short description of the cycle.
    pub description: String,
}

/// Where an elapsed duration falls within the perpetual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CyclePosition {
    /// Number of complete cycles elapsed before this position.
    pub cycle_index: u64,
    /// The phase currently active (or being exited, during a transition).
    pub phase: Phase,
    /// Hours elapsed since the current phase began, transition included.
    pub hours_into_phase: f64,
    /// Whether the outbound transition impedance is currently elapsing.
    pub in_transition: bool,
}

// ---------------------------------------------------------------------------
// Resonance matching
// ---------------------------------------------------------------------------

/// Best-fitting scale index for an observed duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MatchResult {
    /// Scaling family searched.
    pub family: ScalingFamily,
    /// Chosen scale index.
    pub best_n: i32,
    /// Projected duration at `best_n`, in hours.
    pub projected_hours: f64,
    /// Observed duration the projection was compared against, in hours.
    pub observed_hours: f64,
    /// `|projected - observed| / observed`.
    pub relative_error: f64,
}

impl MatchResult {
    /// Bounded closeness score: `1 - relative_error`, clamped to `[0, 1]`.
    pub fn proximity(&self) -> f64 {
        (1.0 - self.relative_error).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Observed phenomena
// ---------------------------------------------------------------------------

/// An externally observed periodic phenomenon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ObservedPhenomenon {
    /// Name of the phenomenon.
    pub name: String,
    /// Observed period, expressed in `unit`.
    pub observed_value: f64,
    /// Unit of `observed_value`.
    pub unit: TimeUnit,
    /// Field of study the observation comes from.
    pub domain: String,
}

/// Previously published comparison values for a phenomenon.
///
/// These are fixtures to check against, not derived ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ReferenceFixture {
    /// Model value the phenomenon was compared with, in the phenomenon's unit.
    pub calculated_value: f64,
    /// Published proximity score.
    pub proximity: f64,
}

/// A phenomenon together with its optional reference fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CatalogEntry {
    /// The observation itself.
    pub phenomenon: ObservedPhenomenon,
    /// Reference values, when any were published.
    pub reference: Option<ReferenceFixture>,
}

// ---------------------------------------------------------------------------
// Survey
// ---------------------------------------------------------------------------

/// Outcome of matching one catalog entry under both scaling families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SurveyEntry {
    /// The phenomenon that was matched.
    pub phenomenon: ObservedPhenomenon,
    /// Observed value converted to hours.
    pub observed_hours: f64,
    /// Best fit under [`ScalingFamily::PhiGrowth`].
    pub phi_fit: MatchResult,
    /// Best fit under [`ScalingFamily::SexagesimalGrowth`].
    pub sexagesimal_fit: MatchResult,
    /// Family whose fit has the lower relative error.
    pub best_family: ScalingFamily,
    /// Proximity of the better fit.
    pub proximity: f64,
    /// Published fixture for comparison, if any.
    pub reference: Option<ReferenceFixture>,
}

/// Full resonance survey over a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SurveyReport {
    /// Unique identifier of this run.
    pub id: SurveyId,
    /// Wall-clock time the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Base duration every projection was seeded with, in hours.
    pub base_hours: f64,
    /// Symmetric scale-index bound used for every search.
    pub search_range: i32,
    /// Constants diagnostic.
    pub coherence: CoherenceReport,
    /// Realized cycle duration.
    pub cycle: CycleDuration,
    /// One entry per catalog phenomenon, in catalog order.
    pub entries: Vec<SurveyEntry>,
}
