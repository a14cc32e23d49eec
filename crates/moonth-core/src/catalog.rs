//! Reference catalog of observed periodic phenomena.
//!
//! The catalog is read-only data: each entry records an observation in its
//! natural unit and, where one was published, the model value and proximity
//! it was first published against. Those published numbers are fixtures to
//! check a survey against, not results this crate derives.
//!
//! | Phenomenon           | Observed   | Domain               | Calc   | Proximity |
//! |----------------------|------------|----------------------|--------|-----------|
//! | BRAC                 | 90 minutes | Neurophysiology      | 92.36  | 0.97      |
//! | Menstrual Cycle      | 28.5 days  | Reproductive biology | 28.54  | 0.99      |
//! | Gestational Duration | 268 days   | Human development    | 264    | 0.96      |
//! | Generational Cycle   | 29 years   | Generational time    | 29     | 1.0       |

use moonth_types::{CatalogEntry, ObservedPhenomenon, ReferenceFixture, TimeUnit};

use crate::error::MoonthError;
use crate::scale::{DAYS_PER_JULIAN_YEAR, HOURS_PER_DAY};

/// Minutes per hour.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Hours in one `unit`.
pub const fn hours_per_unit(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Minutes => 1.0 / MINUTES_PER_HOUR,
        TimeUnit::Hours => 1.0,
        TimeUnit::Days => HOURS_PER_DAY,
        TimeUnit::Years => HOURS_PER_DAY * DAYS_PER_JULIAN_YEAR,
    }
}

/// Convert `value` expressed in `unit` to hours.
pub fn to_hours(value: f64, unit: TimeUnit) -> f64 {
    value * hours_per_unit(unit)
}

/// Observed value of `phenomenon`, in hours.
///
/// # Errors
///
/// Returns [`MoonthError::InvalidObservation`] if the converted value is not
/// positive and finite.
pub fn observed_hours(phenomenon: &ObservedPhenomenon) -> Result<f64, MoonthError> {
    let hours = to_hours(phenomenon.observed_value, phenomenon.unit);
    if !hours.is_finite() || hours <= 0.0 {
        return Err(MoonthError::InvalidObservation(hours));
    }
    Ok(hours)
}

/// The built-in resonance candidates, in catalog order.
pub fn reference_catalog() -> Vec<CatalogEntry> {
    vec![
        entry("BRAC", 90.0, TimeUnit::Minutes, "Neurophysiology", 92.36, 0.97),
        entry(
            "Menstrual Cycle",
            28.5,
            TimeUnit::Days,
            "Reproductive biology",
            28.54,
            0.99,
        ),
        entry(
            "Gestational Duration",
            268.0,
            TimeUnit::Days,
            "Human development",
            264.0,
            0.96,
        ),
        entry(
            "Generational Cycle",
            29.0,
            TimeUnit::Years,
            "Generational time",
            29.0,
            1.0,
        ),
    ]
}

fn entry(
    name: &str,
    observed_value: f64,
    unit: TimeUnit,
    domain: &str,
    calculated_value: f64,
    proximity: f64,
) -> CatalogEntry {
    CatalogEntry {
        phenomenon: ObservedPhenomenon {
            name: name.to_owned(),
            observed_value,
            unit,
            domain: domain.to_owned(),
        },
        reference: Some(ReferenceFixture {
            calculated_value,
            proximity,
        }),
    }
}
