//! Symbolic constant anchors for the Moonth model.
//!
//! The constant set is an immutable value built once by
//! [`KernelConstants::new`] and handed to every component that needs it.
//! Derived anchors (`ALPHA`, `PHI_SQUARED`, `PHI_INVERSE`) are computed from
//! the primitives at construction and never stored anywhere else.
//!
//! | Name            | Value                    |
//! |-----------------|--------------------------|
//! | `ALPHA_INVERSE` | 137.036                  |
//! | `ALPHA`         | 1 / `ALPHA_INVERSE`      |
//! | `PHI`           | (1 + sqrt 5) / 2         |
//! | `PHI_SQUARED`   | `PHI` * `PHI`            |
//! | `PHI_INVERSE`   | 1 / `PHI`                |
//! | `N_PHASES`      | 5                        |

use std::fmt;
use std::str::FromStr;

use moonth_types::CoherenceReport;

use crate::error::MoonthError;
use crate::precision::round_to;

/// Inverse fine-structure-like anchor.
pub const ALPHA_INVERSE: f64 = 137.036;

/// Number of phases in one cycle.
pub const N_PHASES: usize = 5;

/// Reference value of the base-60 system used by the coherence check.
const SEXAGESIMAL_REFERENCE: f64 = 60.0;

/// Divisor applied to `ALPHA_INVERSE * PHI_SQUARED` in the coherence check.
const COHERENCE_DIVISOR: f64 = 6.0;

/// Decimal digits kept in the coherence report.
const COHERENCE_PRECISION: u32 = 4;

/// Name of a registered constant anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstantName {
    /// `ALPHA_INVERSE`.
    AlphaInverse,
    /// `ALPHA`.
    Alpha,
    /// `PHI`.
    Phi,
    /// `PHI_SQUARED`.
    PhiSquared,
    /// `PHI_INVERSE`.
    PhiInverse,
    /// `N_PHASES`.
    NPhases,
}

impl ConstantName {
    /// Every registered anchor, in table order.
    pub const ALL: [Self; 6] = [
        Self::AlphaInverse,
        Self::Alpha,
        Self::Phi,
        Self::PhiSquared,
        Self::PhiInverse,
        Self::NPhases,
    ];

    /// Canonical upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlphaInverse => "ALPHA_INVERSE",
            Self::Alpha => "ALPHA",
            Self::Phi => "PHI",
            Self::PhiSquared => "PHI_SQUARED",
            Self::PhiInverse => "PHI_INVERSE",
            Self::NPhases => "N_PHASES",
        }
    }
}

impl fmt::Display for ConstantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstantName {
    type Err = MoonthError;

    /// Parse a constant name case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let upper = name.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == upper)
            .ok_or_else(|| MoonthError::UnknownConstant(name.to_owned()))
    }
}

/// The immutable set of symbolic anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConstants {
    alpha_inverse: f64,
    alpha: f64,
    phi: f64,
    phi_squared: f64,
    phi_inverse: f64,
    phase_count: usize,
}

impl KernelConstants {
    /// Build the constant set from its primitives.
    pub fn new() -> Self {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        Self {
            alpha_inverse: ALPHA_INVERSE,
            alpha: ALPHA_INVERSE.recip(),
            phi,
            phi_squared: phi * phi,
            phi_inverse: phi.recip(),
            phase_count: N_PHASES,
        }
    }

    /// Look up an anchor by name.
    ///
    /// # Errors
    ///
    /// Returns [`MoonthError::UnknownConstant`] if `name` is not registered.
    pub fn get_constant(&self, name: &str) -> Result<f64, MoonthError> {
        let parsed: ConstantName = name.parse()?;
        Ok(self.value(parsed))
    }

    /// Value of a typed anchor name.
    pub const fn value(&self, name: ConstantName) -> f64 {
        match name {
            ConstantName::AlphaInverse => self.alpha_inverse,
            ConstantName::Alpha => self.alpha,
            ConstantName::Phi => self.phi,
            ConstantName::PhiSquared => self.phi_squared,
            ConstantName::PhiInverse => self.phi_inverse,
            // Exact: the phase count is a small integer.
            #[allow(clippy::cast_precision_loss)]
            ConstantName::NPhases => self.phase_count as f64,
        }
    }

    /// The golden ratio.
    pub const fn phi(&self) -> f64 {
        self.phi
    }

    /// Number of phases per cycle.
    pub const fn phase_count(&self) -> usize {
        self.phase_count
    }

    /// All anchors as `(name, value)` pairs, in table order.
    pub fn entries(&self) -> Vec<(ConstantName, f64)> {
        ConstantName::ALL
            .into_iter()
            .map(|name| (name, self.value(name)))
            .collect()
    }

    /// Symbolic proximity between `alpha^-1 * phi^2 / 6` and base 60.
    ///
    /// Both the computed value and the signed relative error are rounded to
    /// 4 decimal digits.
    pub fn coherence_check(&self) -> CoherenceReport {
        let computed = self.alpha_inverse * self.phi_squared / COHERENCE_DIVISOR;
        let relative_error = (computed - SEXAGESIMAL_REFERENCE) / SEXAGESIMAL_REFERENCE;
        CoherenceReport {
            expression: "α⁻¹ × φ² / 6".to_owned(),
            computed_value: round_to(computed, COHERENCE_PRECISION),
            reference_value: SEXAGESIMAL_REFERENCE,
            relative_error: round_to(relative_error, COHERENCE_PRECISION),
        }
    }
}

impl Default for KernelConstants {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn phi_is_golden_ratio() {
        let k = KernelConstants::new();
        assert!((k.phi() - 1.618_033_988_749_895).abs() < 1e-15);
    }

    #[test]
    fn derived_constants_follow_primitives() {
        let k = KernelConstants::new();
        let phi = k.get_constant("PHI").unwrap();
        assert!((k.get_constant("PHI_SQUARED").unwrap() - phi * phi).abs() < 1e-12);
        assert!((k.get_constant("PHI_INVERSE").unwrap() * phi - 1.0).abs() < 1e-12);
        assert!((k.get_constant("ALPHA").unwrap() * ALPHA_INVERSE - 1.0).abs() < 1e-12);
        // phi^2 == phi + 1
        assert!((k.get_constant("PHI_SQUARED").unwrap() - (phi + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn names_are_case_insensitive() {
        let k = KernelConstants::new();
        let upper = k.get_constant("ALPHA_INVERSE").unwrap();
        let lower = k.get_constant("alpha_inverse").unwrap();
        assert!((upper - lower).abs() < f64::EPSILON);
        assert!((upper - 137.036).abs() < f64::EPSILON);
    }

    #[test]
    fn phase_count_is_five() {
        let k = KernelConstants::new();
        assert_eq!(k.phase_count(), 5);
        assert!((k.get_constant("N_PHASES").unwrap() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_constant_is_rejected() {
        let k = KernelConstants::new();
        let result = k.get_constant("PLANCK");
        assert_eq!(result, Err(MoonthError::UnknownConstant("PLANCK".to_owned())));
    }

    #[test]
    fn coherence_check_is_near_sixty() {
        let k = KernelConstants::new();
        let report = k.coherence_check();
        let expected = 137.036 * k.phi() * k.phi() / 6.0;
        assert!((report.computed_value - expected).abs() < 1e-4);
        assert!((report.reference_value - 60.0).abs() < f64::EPSILON);
        assert!(report.relative_error.abs() < 0.01);
        // The product falls just short of 60.
        assert!(report.relative_error < 0.0);
        assert!((report.relative_error - -0.0034).abs() < 1e-12);
    }

    #[test]
    fn entries_cover_every_name() {
        let k = KernelConstants::new();
        let entries = k.entries();
        assert_eq!(entries.len(), ConstantName::ALL.len());
        assert_eq!(entries.first().map(|(n, _)| *n), Some(ConstantName::AlphaInverse));
    }
}
