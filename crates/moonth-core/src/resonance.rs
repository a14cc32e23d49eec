//! Resonance matching: which scale index best reproduces an observation.
//!
//! For an observed duration the matcher scans every index in
//! `[-range, +range]`, projects the base duration to that index, and keeps
//! the index with the smallest relative error. The scan is exhaustive
//! because near `n = 0` the error is not reliably unimodal.
//!
//! Indices are visited as `0, -1, 1, -2, 2, ...` and the incumbent is only
//! replaced by a strictly better error. That ordering is the tie-break:
//! equal errors keep the smaller `|n|`, then the smaller signed `n`.

use moonth_types::{MatchResult, ScalingFamily};
use tracing::debug;

use crate::error::MoonthError;
use crate::scale::ScaleGenerator;

/// Default symmetric bound on the scale index.
pub const DEFAULT_SEARCH_RANGE: i32 = 10;

/// Errors closer than this are treated as equal.
const TIE_TOLERANCE: f64 = 1e-12;

/// Bounded best-fit search over scale indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonanceMatcher {
    generator: ScaleGenerator,
}

impl ResonanceMatcher {
    /// Create a matcher projecting candidates with `generator`.
    pub const fn new(generator: ScaleGenerator) -> Self {
        Self { generator }
    }

    /// The generator used to project candidates.
    pub const fn generator(&self) -> &ScaleGenerator {
        &self.generator
    }

    /// Find the scale index whose projection best approximates
    /// `observed_hours`.
    ///
    /// # Errors
    ///
    /// - [`MoonthError::EmptySearchRange`] if `search_range` is negative.
    /// - [`MoonthError::InvalidObservation`] if `observed_hours` is not
    ///   positive and finite.
    /// - [`MoonthError::InvalidBase`] if `base_hours` is not positive and
    ///   finite.
    pub fn best_fit(
        &self,
        family: ScalingFamily,
        base_hours: f64,
        observed_hours: f64,
        search_range: i32,
    ) -> Result<MatchResult, MoonthError> {
        if search_range < 0 {
            return Err(MoonthError::EmptySearchRange(search_range));
        }
        if !observed_hours.is_finite() || observed_hours <= 0.0 {
            return Err(MoonthError::InvalidObservation(observed_hours));
        }

        let origin = self.generator.project(family, 0, base_hours)?;
        let mut best = MatchResult {
            family,
            best_n: 0,
            projected_hours: origin.hours,
            observed_hours,
            relative_error: relative_error(origin.hours, observed_hours),
        };

        for magnitude in 1..=search_range {
            // `magnitude` is positive, so negation cannot overflow.
            for n in [magnitude.saturating_neg(), magnitude] {
                let projected = self.generator.project(family, n, base_hours)?.hours;
                let error = relative_error(projected, observed_hours);
                if error < best.relative_error - TIE_TOLERANCE {
                    best = MatchResult {
                        family,
                        best_n: n,
                        projected_hours: projected,
                        observed_hours,
                        relative_error: error,
                    };
                }
            }
        }

        debug!(
            family = ?family,
            base_hours,
            observed_hours,
            search_range,
            best_n = best.best_n,
            relative_error = best.relative_error,
            "Resonance search complete"
        );
        Ok(best)
    }
}

/// `|projected - observed| / observed`.
///
/// `observed` must be positive; callers validate it first.
pub fn relative_error(projected: f64, observed: f64) -> f64 {
    (projected - observed).abs() / observed
}
