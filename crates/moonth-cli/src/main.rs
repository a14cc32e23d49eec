//! Command-line entry point for the Moonth cyclical phase engine.
//!
//! Loads configuration, builds the engine components, runs the resonance
//! survey over the reference catalog, and prints the report as JSON on
//! stdout. Logs go to stderr so the report can be piped.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `moonth-config.yaml` (or `MOONTH_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build constants, phase cycle, scale generator, and matcher
//! 4. Log the coherence check and cycle duration
//! 5. Run the survey and print the report

mod error;

use std::path::PathBuf;

use moonth_core::catalog::reference_catalog;
use moonth_core::{
    KernelConstants, MoonthConfig, ResonanceMatcher, ScaleGenerator, operating_principles,
    run_survey,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "moonth-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, model validation, or the survey fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration (before logging, which reads its level from it).
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config file.
    let level = config.logging.level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("moonth starting");
    if !config_path.exists() {
        info!("Config file not found, using defaults");
    }
    info!(
        config_path = %config_path.display(),
        phase_quantum_hours = config.model.phase_quantum_hours,
        buffer_total_hours = config.model.buffer_total_hours,
        base_hours = config.resonance.base_hours,
        search_range = config.resonance.search_range,
        "Configuration loaded"
    );

    run(&config)?;

    info!("moonth finished");
    Ok(())
}

/// Build the engine from `config`, run the survey, and print the report.
fn run(config: &MoonthConfig) -> Result<(), CliError> {
    // 3. Build components.
    let constants = KernelConstants::new();
    for (name, value) in constants.entries() {
        debug!(constant = %name, value, "Constant registered");
    }

    let cycle = config.model.build_cycle(&constants)?;
    let matcher = ResonanceMatcher::new(ScaleGenerator::new(&constants));

    // 4. Diagnostics.
    let coherence = constants.coherence_check();
    info!(
        expression = %coherence.expression,
        computed_value = coherence.computed_value,
        reference_value = coherence.reference_value,
        relative_error = coherence.relative_error,
        "Coherence check"
    );

    let duration = cycle.total_cycle_duration();
    info!(
        total_hours = duration.total_hours,
        total_days = duration.total_days,
        "Cycle duration"
    );

    for principle in operating_principles() {
        debug!(principle = principle.name, statement = principle.statement, "Principle");
    }

    // 5. Survey.
    let report = run_survey(
        &matcher,
        &cycle,
        &constants,
        &reference_catalog(),
        &config.resonance,
    )?;
    info!(survey_id = %report.id, entries = report.entries.len(), "Survey complete");

    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

/// Load the configuration file named by `MOONTH_CONFIG`, or
/// `moonth-config.yaml` in the working directory.
///
/// A missing file is not an error: defaults describe the canonical model.
fn load_config() -> Result<(MoonthConfig, PathBuf), CliError> {
    let path = std::env::var_os("MOONTH_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = MoonthConfig::from_file(&path)?;
        Ok((config, path))
    } else {
        Ok((MoonthConfig::default(), path))
    }
}
