//! The five-phase cycle and its weighted transitions.
//!
//! A cycle is five phases of equal nominal duration (the *phase quantum*),
//! each followed by the impedance of its outbound transition. The cycle is
//! perpetual: [`Phase::Integration`] hands over to [`Phase::Opening`] and
//! there is no terminal state.
//!
//! # Design Principles
//!
//! - The transition table is validated once at construction. It must hold
//!   exactly the five cyclic-adjacent pairs, and their impedances must sum
//!   to the declared buffer total.
//! - The cycle duration is derived on demand from the quantum and the
//!   table, never stored independently.
//! - Position within the cycle is time-driven: it is computed from elapsed
//!   hours, the same way the phase order never depends on external events.

use std::collections::BTreeMap;

use moonth_types::{CycleDuration, CyclePosition, Phase};
use tracing::debug;

use crate::constants::KernelConstants;
use crate::error::MoonthError;
use crate::precision::round_to;

/// Default nominal duration of every phase, in hours.
pub const DEFAULT_PHASE_QUANTUM_HOURS: f64 = 137.0;

/// Default sum of all transition impedances, in hours.
pub const DEFAULT_BUFFER_TOTAL_HOURS: f64 = 11.0;

/// Tolerance when checking the impedance sum against the buffer total.
const BUFFER_TOLERANCE: f64 = 1e-9;

/// Decimal digits kept for the cycle length in days.
const DAYS_PRECISION: u32 = 2;

/// Phases in cycle order.
pub const PHASES: [Phase; 5] = [
    Phase::Opening,
    Phase::Rise,
    Phase::Expansion,
    Phase::Descent,
    Phase::Integration,
];

/// Default transition table: asymmetric overhead between adjacent phases.
pub const DEFAULT_TRANSITIONS: [Transition; 5] = [
    Transition::new(Phase::Opening, Phase::Rise, 2.0),
    Transition::new(Phase::Rise, Phase::Expansion, 3.0),
    Transition::new(Phase::Expansion, Phase::Descent, 1.0),
    Transition::new(Phase::Descent, Phase::Integration, 4.0),
    Transition::new(Phase::Integration, Phase::Opening, 1.0),
];

/// A weighted move from one phase to its cyclic successor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Phase being left.
    pub from: Phase,
    /// Phase being entered.
    pub to: Phase,
    /// Overhead charged for the move, in hours.
    pub impedance_hours: f64,
}

impl Transition {
    /// Create a transition entry.
    pub const fn new(from: Phase, to: Phase, impedance_hours: f64) -> Self {
        Self {
            from,
            to,
            impedance_hours,
        }
    }
}

/// Cyclic successor of a phase.
pub const fn successor(phase: Phase) -> Phase {
    match phase {
        Phase::Opening => Phase::Rise,
        Phase::Rise => Phase::Expansion,
        Phase::Expansion => Phase::Descent,
        Phase::Descent => Phase::Integration,
        Phase::Integration => Phase::Opening,
    }
}

/// The validated phase state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCycle {
    /// Nominal duration of each phase, in hours.
    phase_quantum_hours: f64,

    /// Declared sum of all impedances, in hours.
    buffer_total_hours: f64,

    /// Outbound impedance keyed by the phase being left.
    impedances: BTreeMap<Phase, f64>,
}

impl PhaseCycle {
    /// Build the default cycle: 137-hour phases and 11 hours of transitions.
    ///
    /// # Errors
    ///
    /// Returns [`MoonthError::InvalidModel`] if the constant set does not
    /// describe a five-phase cycle.
    pub fn new(constants: &KernelConstants) -> Result<Self, MoonthError> {
        Self::from_parts(
            constants,
            DEFAULT_PHASE_QUANTUM_HOURS,
            DEFAULT_BUFFER_TOTAL_HOURS,
            &DEFAULT_TRANSITIONS,
        )
    }

    /// Build a cycle from an explicit quantum and transition table.
    ///
    /// # Errors
    ///
    /// Returns [`MoonthError::InvalidModel`] if the quantum is not positive,
    /// an impedance is negative or not finite, a pair is not cyclic-adjacent,
    /// a pair is duplicated or missing, or the impedances do not sum to
    /// `buffer_total_hours`.
    pub fn from_parts(
        constants: &KernelConstants,
        phase_quantum_hours: f64,
        buffer_total_hours: f64,
        transitions: &[Transition],
    ) -> Result<Self, MoonthError> {
        if constants.phase_count() != PHASES.len() {
            return Err(invalid(format!(
                "constant set declares {} phases, cycle has {}",
                constants.phase_count(),
                PHASES.len()
            )));
        }
        if !phase_quantum_hours.is_finite() || phase_quantum_hours <= 0.0 {
            return Err(invalid(format!(
                "phase quantum must be positive, got {phase_quantum_hours}"
            )));
        }

        let mut impedances = BTreeMap::new();
        for transition in transitions {
            if transition.to != successor(transition.from) {
                return Err(invalid(format!(
                    "{:?} -> {:?} is not a cyclic-adjacent pair",
                    transition.from, transition.to
                )));
            }
            if !transition.impedance_hours.is_finite() || transition.impedance_hours < 0.0 {
                return Err(invalid(format!(
                    "impedance for {:?} -> {:?} must be non-negative, got {}",
                    transition.from, transition.to, transition.impedance_hours
                )));
            }
            if impedances
                .insert(transition.from, transition.impedance_hours)
                .is_some()
            {
                return Err(invalid(format!(
                    "duplicate transition {:?} -> {:?}",
                    transition.from, transition.to
                )));
            }
        }

        if let Some(missing) = PHASES.iter().find(|p| !impedances.contains_key(*p)) {
            return Err(invalid(format!(
                "missing transition {missing:?} -> {:?}",
                successor(*missing)
            )));
        }

        let sum: f64 = impedances.values().sum();
        if (sum - buffer_total_hours).abs() > BUFFER_TOLERANCE {
            return Err(invalid(format!(
                "impedances sum to {sum} hours, buffer total is {buffer_total_hours}"
            )));
        }

        let cycle = Self {
            phase_quantum_hours,
            buffer_total_hours,
            impedances,
        };
        debug!(
            phase_quantum_hours,
            buffer_total_hours,
            total_hours = cycle.total_hours(),
            "Phase cycle initialized"
        );
        Ok(cycle)
    }

    /// Nominal duration of each phase, in hours.
    pub const fn phase_quantum_hours(&self) -> f64 {
        self.phase_quantum_hours
    }

    /// Declared sum of all transition impedances, in hours.
    pub const fn buffer_total_hours(&self) -> f64 {
        self.buffer_total_hours
    }

    /// Overhead of moving from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`MoonthError::UndefinedTransition`] unless `to` is the cyclic
    /// successor of `from`.
    pub fn transition_impedance(&self, from: Phase, to: Phase) -> Result<f64, MoonthError> {
        if to != successor(from) {
            return Err(MoonthError::UndefinedTransition { from, to });
        }
        self.impedances
            .get(&from)
            .copied()
            .ok_or(MoonthError::UndefinedTransition { from, to })
    }

    /// The phase that follows `phase`. [`Phase::Integration`] wraps around.
    pub const fn next_phase(&self, phase: Phase) -> Phase {
        successor(phase)
    }

    /// Total realized duration of one cycle.
    pub fn total_cycle_duration(&self) -> CycleDuration {
        let total_hours = self.total_hours();
        CycleDuration {
            total_hours,
            total_days: round_to(total_hours / 24.0, DAYS_PRECISION),
            description: "One symbolic Moonth cycle".to_owned(),
        }
    }

    /// Locate `elapsed_hours` (measured from the start of an Opening phase)
    /// within the perpetual cycle.
    ///
    /// # Errors
    ///
    /// Returns [`MoonthError::InvalidModel`] if `elapsed_hours` is negative
    /// or not finite.
    pub fn position_at(&self, elapsed_hours: f64) -> Result<CyclePosition, MoonthError> {
        if !elapsed_hours.is_finite() || elapsed_hours < 0.0 {
            return Err(invalid(format!(
                "elapsed time must be non-negative, got {elapsed_hours}"
            )));
        }

        let cycle_hours = self.total_hours();
        let completed = (elapsed_hours / cycle_hours).floor();
        // Float-to-int casts saturate; `completed` is non-negative and whole.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cycle_index = completed as u64;
        let mut offset = elapsed_hours.rem_euclid(cycle_hours);

        for phase in PHASES {
            let impedance = self.impedances.get(&phase).copied().unwrap_or(0.0);
            let span = self.phase_quantum_hours + impedance;
            if offset < span {
                return Ok(CyclePosition {
                    cycle_index,
                    phase,
                    hours_into_phase: offset,
                    in_transition: offset >= self.phase_quantum_hours,
                });
            }
            offset -= span;
        }

        // Rounding left the offset at the very end of the last transition.
        let last_impedance = self
            .impedances
            .get(&Phase::Integration)
            .copied()
            .unwrap_or(0.0);
        Ok(CyclePosition {
            cycle_index,
            phase: Phase::Integration,
            hours_into_phase: self.phase_quantum_hours + last_impedance,
            in_transition: true,
        })
    }

    /// Sum of every phase quantum and every outbound impedance.
    fn total_hours(&self) -> f64 {
        PHASES
            .iter()
            .map(|p| self.phase_quantum_hours + self.impedances.get(p).copied().unwrap_or(0.0))
            .sum()
    }
}

fn invalid(reason: String) -> MoonthError {
    MoonthError::InvalidModel { reason }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn default_cycle() -> PhaseCycle {
        PhaseCycle::new(&KernelConstants::new()).unwrap()
    }

    #[test]
    fn total_cycle_is_696_hours() {
        let cycle = default_cycle();
        let duration = cycle.total_cycle_duration();
        assert!((duration.total_hours - 696.0).abs() < 1e-9);
        assert!((duration.total_days - 29.0).abs() < 1e-9);
        assert_eq!(duration.description, "One symbolic Moonth cycle");
    }

    #[test]
    fn impedances_sum_to_buffer_total() {
        let cycle = default_cycle();
        let sum: f64 = PHASES
            .iter()
            .map(|p| cycle.transition_impedance(*p, successor(*p)).unwrap())
            .sum();
        assert!((sum - 11.0).abs() < 1e-12);
        assert!((sum - cycle.buffer_total_hours()).abs() < 1e-12);
    }

    #[test]
    fn impedance_table_is_asymmetric() {
        let cycle = default_cycle();
        let expected = [
            (Phase::Opening, 2.0),
            (Phase::Rise, 3.0),
            (Phase::Expansion, 1.0),
            (Phase::Descent, 4.0),
            (Phase::Integration, 1.0),
        ];
        for (from, hours) in expected {
            let got = cycle.transition_impedance(from, successor(from)).unwrap();
            assert!((got - hours).abs() < f64::EPSILON, "{from:?}");
        }
    }

    #[test]
    fn integration_wraps_to_opening() {
        let cycle = default_cycle();
        assert_eq!(cycle.next_phase(Phase::Integration), Phase::Opening);
        assert_eq!(cycle.next_phase(Phase::Opening), Phase::Rise);
    }

    #[test]
    fn five_steps_close_the_cycle() {
        let cycle = default_cycle();
        for start in PHASES {
            let mut phase = start;
            for _ in 0..5 {
                phase = cycle.next_phase(phase);
            }
            assert_eq!(phase, start);
        }
    }

    #[test]
    fn skipping_a_phase_is_undefined() {
        let cycle = default_cycle();
        let result = cycle.transition_impedance(Phase::Opening, Phase::Expansion);
        assert_eq!(
            result,
            Err(MoonthError::UndefinedTransition {
                from: Phase::Opening,
                to: Phase::Expansion,
            })
        );
    }

    #[test]
    fn backwards_and_self_transitions_are_undefined() {
        let cycle = default_cycle();
        assert!(cycle.transition_impedance(Phase::Rise, Phase::Opening).is_err());
        assert!(cycle.transition_impedance(Phase::Descent, Phase::Descent).is_err());
    }

    #[test]
    fn rejects_non_adjacent_table_entry() {
        let mut table = DEFAULT_TRANSITIONS;
        table[0] = Transition::new(Phase::Opening, Phase::Expansion, 2.0);
        let result = PhaseCycle::from_parts(&KernelConstants::new(), 137.0, 11.0, &table);
        assert!(matches!(result, Err(MoonthError::InvalidModel { .. })));
    }

    #[test]
    fn rejects_duplicate_and_missing_entries() {
        let mut table = DEFAULT_TRANSITIONS;
        table[4] = Transition::new(Phase::Opening, Phase::Rise, 1.0);
        let result = PhaseCycle::from_parts(&KernelConstants::new(), 137.0, 11.0, &table);
        assert!(matches!(result, Err(MoonthError::InvalidModel { .. })));

        let short = &DEFAULT_TRANSITIONS[..4];
        let result = PhaseCycle::from_parts(&KernelConstants::new(), 137.0, 10.0, short);
        assert!(matches!(result, Err(MoonthError::InvalidModel { .. })));
    }

    #[test]
    fn rejects_buffer_mismatch() {
        let result =
            PhaseCycle::from_parts(&KernelConstants::new(), 137.0, 12.0, &DEFAULT_TRANSITIONS);
        assert!(matches!(result, Err(MoonthError::InvalidModel { .. })));
    }

    #[test]
    fn rejects_negative_impedance_and_bad_quantum() {
        let mut table = DEFAULT_TRANSITIONS;
        table[2] = Transition::new(Phase::Expansion, Phase::Descent, -1.0);
        let result = PhaseCycle::from_parts(&KernelConstants::new(), 137.0, 9.0, &table);
        assert!(matches!(result, Err(MoonthError::InvalidModel { .. })));

        let result =
            PhaseCycle::from_parts(&KernelConstants::new(), 0.0, 11.0, &DEFAULT_TRANSITIONS);
        assert!(matches!(result, Err(MoonthError::InvalidModel { .. })));
    }

    #[test]
    fn custom_model_changes_cycle_length() {
        let table = [
            Transition::new(Phase::Opening, Phase::Rise, 1.0),
            Transition::new(Phase::Rise, Phase::Expansion, 1.0),
            Transition::new(Phase::Expansion, Phase::Descent, 1.0),
            Transition::new(Phase::Descent, Phase::Integration, 1.0),
            Transition::new(Phase::Integration, Phase::Opening, 1.0),
        ];
        let cycle = PhaseCycle::from_parts(&KernelConstants::new(), 23.0, 5.0, &table).unwrap();
        let duration = cycle.total_cycle_duration();
        assert!((duration.total_hours - 120.0).abs() < 1e-9);
        assert!((duration.total_days - 5.0).abs() < 1e-9);
    }

    #[test]
    fn position_at_start_is_opening() {
        let cycle = default_cycle();
        let pos = cycle.position_at(0.0).unwrap();
        assert_eq!(pos.cycle_index, 0);
        assert_eq!(pos.phase, Phase::Opening);
        assert!(!pos.in_transition);
    }

    #[test]
    fn position_during_outbound_transition() {
        let cycle = default_cycle();
        // Opening spans 137h plus a 2h transition.
        let pos = cycle.position_at(138.0).unwrap();
        assert_eq!(pos.phase, Phase::Opening);
        assert!(pos.in_transition);
        assert!((pos.hours_into_phase - 138.0).abs() < 1e-9);

        let pos = cycle.position_at(139.0).unwrap();
        assert_eq!(pos.phase, Phase::Rise);
        assert!(!pos.in_transition);
        assert!(pos.hours_into_phase.abs() < 1e-9);
    }

    #[test]
    fn position_wraps_into_next_cycle() {
        let cycle = default_cycle();
        let pos = cycle.position_at(696.0).unwrap();
        assert_eq!(pos.cycle_index, 1);
        assert_eq!(pos.phase, Phase::Opening);

        // 2 cycles + Opening (139) + Rise (140) + 10h into Expansion.
        let pos = cycle.position_at(2.0 * 696.0 + 139.0 + 140.0 + 10.0).unwrap();
        assert_eq!(pos.cycle_index, 2);
        assert_eq!(pos.phase, Phase::Expansion);
        assert!((pos.hours_into_phase - 10.0).abs() < 1e-9);
    }

    #[test]
    fn position_rejects_negative_time() {
        let cycle = default_cycle();
        assert!(matches!(
            cycle.position_at(-1.0),
            Err(MoonthError::InvalidModel { .. })
        ));
        assert!(cycle.position_at(f64::NAN).is_err());
    }
}
