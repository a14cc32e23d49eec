//! Resonance survey over a catalog of observed phenomena.
//!
//! Every catalog entry is converted to hours and matched under both scaling
//! families. The family with the lower relative error wins; on a tie the
//! golden-ratio family is kept. The report also carries the constants
//! diagnostic and the cycle duration so it stands on its own.

use chrono::Utc;
use moonth_types::{CatalogEntry, ScalingFamily, SurveyEntry, SurveyId, SurveyReport};
use tracing::{info, warn};

use crate::catalog::observed_hours;
use crate::config::ResonanceConfig;
use crate::constants::KernelConstants;
use crate::error::MoonthError;
use crate::phase::PhaseCycle;
use crate::resonance::ResonanceMatcher;

/// Match a single catalog entry under both families.
///
/// # Errors
///
/// Propagates [`MoonthError::InvalidObservation`],
/// [`MoonthError::InvalidBase`] and [`MoonthError::EmptySearchRange`] from
/// the matcher.
pub fn survey_entry(
    matcher: &ResonanceMatcher,
    entry: &CatalogEntry,
    settings: &ResonanceConfig,
) -> Result<SurveyEntry, MoonthError> {
    let hours = observed_hours(&entry.phenomenon)?;
    let phi_fit = matcher.best_fit(
        ScalingFamily::PhiGrowth,
        settings.base_hours,
        hours,
        settings.search_range,
    )?;
    let sexagesimal_fit = matcher.best_fit(
        ScalingFamily::SexagesimalGrowth,
        settings.base_hours,
        hours,
        settings.search_range,
    )?;

    let best = if sexagesimal_fit.relative_error < phi_fit.relative_error {
        sexagesimal_fit
    } else {
        phi_fit
    };
    let proximity = best.proximity();

    if let Some(reference) = entry.reference {
        if (proximity - reference.proximity).abs() > settings.divergence_warning {
            warn!(
                phenomenon = %entry.phenomenon.name,
                proximity,
                reference_proximity = reference.proximity,
                "Computed proximity diverges from published fixture"
            );
        }
    }

    Ok(SurveyEntry {
        phenomenon: entry.phenomenon.clone(),
        observed_hours: hours,
        phi_fit,
        sexagesimal_fit,
        best_family: best.family,
        proximity,
        reference: entry.reference,
    })
}

/// Run the survey over `catalog` and assemble a report.
///
/// # Errors
///
/// Fails on the first entry the matcher rejects.
pub fn run_survey(
    matcher: &ResonanceMatcher,
    cycle: &PhaseCycle,
    constants: &KernelConstants,
    catalog: &[CatalogEntry],
    settings: &ResonanceConfig,
) -> Result<SurveyReport, MoonthError> {
    let id = SurveyId::new();
    info!(
        survey_id = %id,
        entries = catalog.len(),
        base_hours = settings.base_hours,
        search_range = settings.search_range,
        "Resonance survey starting"
    );

    let entries = catalog
        .iter()
        .map(|entry| survey_entry(matcher, entry, settings))
        .collect::<Result<Vec<_>, _>>()?;

    for entry in &entries {
        info!(
            phenomenon = %entry.phenomenon.name,
            best_family = ?entry.best_family,
            proximity = entry.proximity,
            "Survey entry matched"
        );
    }

    Ok(SurveyReport {
        id,
        generated_at: Utc::now(),
        base_hours: settings.base_hours,
        search_range: settings.search_range,
        coherence: constants.coherence_check(),
        cycle: cycle.total_cycle_duration(),
        entries,
    })
}
