//! Multi-scale duration projection.
//!
//! A base duration is projected to an integer scale index `n` by repeated
//! geometric growth: `base * multiplier^n`. Negative indices contract,
//! `n = 0` is the identity.

use moonth_types::{ScaleProjection, ScalingFamily};

use crate::constants::KernelConstants;
use crate::error::MoonthError;

/// Hours per day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days per Julian year. An approximation, not a calendar year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Per-step multiplier of the sexagesimal family.
const SEXAGESIMAL_BASE: f64 = 60.0;

/// Projects base durations across scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleGenerator {
    phi: f64,
}

impl ScaleGenerator {
    /// Create a generator reading its growth factors from `constants`.
    pub const fn new(constants: &KernelConstants) -> Self {
        Self {
            phi: constants.phi(),
        }
    }

    /// Growth factor applied per scale step.
    pub const fn multiplier(&self, family: ScalingFamily) -> f64 {
        match family {
            ScalingFamily::PhiGrowth => self.phi,
            ScalingFamily::SexagesimalGrowth => SEXAGESIMAL_BASE,
        }
    }

    /// Project `base_hours` to scale index `n`.
    ///
    /// # Errors
    ///
    /// Returns [`MoonthError::InvalidBase`] if `base_hours` is not positive
    /// and finite.
    pub fn project(
        &self,
        family: ScalingFamily,
        n: i32,
        base_hours: f64,
    ) -> Result<ScaleProjection, MoonthError> {
        if !base_hours.is_finite() || base_hours <= 0.0 {
            return Err(MoonthError::InvalidBase(base_hours));
        }
        let hours = base_hours * self.multiplier(family).powi(n);
        Ok(ScaleProjection {
            family,
            n,
            hours,
            days: hours / HOURS_PER_DAY,
            years: hours / (HOURS_PER_DAY * DAYS_PER_JULIAN_YEAR),
        })
    }
}
