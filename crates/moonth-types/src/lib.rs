//! Shared type definitions for the Moonth cyclical phase engine.
//!
//! This crate holds the plain records exchanged between the engine and its
//! callers. Types defined here flow downstream to `TypeScript` via `ts-rs`
//! so report consumers can read the JSON output with generated bindings.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers
//! - [`enums`] -- Phases, scaling families, and time units
//! - [`structs`] -- Projections, match results, cycle records, survey reports

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Phase, ScalingFamily, TimeUnit};
pub use ids::SurveyId;
pub use structs::{
    CatalogEntry, CoherenceReport, CycleDuration, CyclePosition, MatchResult,
    ObservedPhenomenon, ReferenceFixture, ScaleProjection, SurveyEntry, SurveyReport,
};

#[cfg(test)]
mod tests {
    //! Binding generation for every exported type.

    #[test]
    fn export_bindings() {
        // ts-rs writes the files into `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::SurveyId::export_all();

        // Enums
        let _ = crate::enums::Phase::export_all();
        let _ = crate::enums::ScalingFamily::export_all();
        let _ = crate::enums::TimeUnit::export_all();

        // Structs
        let _ = crate::structs::CoherenceReport::export_all();
        let _ = crate::structs::ScaleProjection::export_all();
        let _ = crate::structs::CycleDuration::export_all();
        let _ = crate::structs::CyclePosition::export_all();
        let _ = crate::structs::MatchResult::export_all();
        let _ = crate::structs::ObservedPhenomenon::export_all();
        let _ = crate::structs::ReferenceFixture::export_all();
        let _ = crate::structs::CatalogEntry::export_all();
        let _ = crate::structs::SurveyEntry::export_all();
        let _ = crate::structs::SurveyReport::export_all();
    }
}
