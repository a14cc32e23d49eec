//! The eleven qualitative operating principles of the model.
//!
//! These statements document the model's assumptions. Nothing in the engine
//! computes with them; they are exposed so reports and tooling can print
//! them next to the numbers.

use serde::Serialize;

/// A named qualitative principle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatingPrinciple {
    /// Short name of the principle.
    pub name: &'static str,
    /// One-line statement.
    pub statement: &'static str,
}

static PRINCIPLES: [OperatingPrinciple; 11] = [
    principle(
        "Cyclicity",
        "Experience unfolds in recurring cycles independent of calendars.",
    ),
    principle(
        "Quantization",
        "The cycle is modeled as five phases of ~137h each.",
    ),
    principle("Asymmetry", "Expansion and contraction are not symmetric."),
    principle(
        "Conservation",
        "Energy redistributed across the cycle balances out.",
    ),
    principle(
        "Transition",
        "Phase changes require time and cannot be instantaneous.",
    ),
    principle("Resonance", "Individual cycles may align with larger rhythms."),
    principle("Invariance", "Phase order does not change within a cycle."),
    principle(
        "Scalability",
        "The same pattern can model multiple time scales.",
    ),
    principle(
        "Perturbation",
        "External stress shifts timing but not structure.",
    ),
    principle("Integration", "Completion of a cycle yields consolidation."),
    principle("Interpretation", "Meaning arises from use, not assertion."),
];

const fn principle(name: &'static str, statement: &'static str) -> OperatingPrinciple {
    OperatingPrinciple { name, statement }
}

/// All principles, in declaration order.
pub fn operating_principles() -> &'static [OperatingPrinciple] {
    &PRINCIPLES
}

/// Look up a principle by name (case-insensitive).
pub fn find_principle(name: &str) -> Option<&'static OperatingPrinciple> {
    PRINCIPLES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
