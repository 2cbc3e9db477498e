//! Cycle-by-cycle kinetic model of PCR amplification.
//!
//! Each cycle picks one of two kinetic ceilings and then checks the result
//! against the remaining nucleotide pool:
//!
//! 1. **Regime test**: the reassociation-limited increment
//!    `c / (1 + k·c·t)` is compared with the polymerase capacity. If the
//!    enzyme is the tighter bound the cycle adds exactly that capacity,
//!    otherwise the re-annealing kinetics give `c · (2 + k·c·t) / (1 + k·c·t)`.
//! 2. **Substrate check**: the nucleotides needed for the new product are
//!    taken from the pool. A pool driven below zero rolls the cycle back and
//!    stays negative, so the reaction plateaus for the rest of the run.
//!
//! ## Examples
//!
//! ```rust
//! use pcrsim_core::config::KineticParameters;
//! use pcrsim_core::kinetics::simulate;
//!
//! let trajectory = simulate(1.0e-9, &KineticParameters::default())?;
//! assert_eq!(trajectory.len(), 36);
//! # Ok::<(), pcrsim_core::types::PcrError>(())
//! ```
//!
//! Cycles can also be consumed lazily and abandoned early:
//!
//! ```rust
//! use pcrsim_core::config::KineticParameters;
//! use pcrsim_core::kinetics::AmplificationSimulator;
//! use pcrsim_core::types::Regime;
//!
//! let simulator = AmplificationSimulator::new(KineticParameters::default())?;
//! let first_plateau = simulator
//!     .cycles(1.0e-9)?
//!     .find(|record| record.regime() == Regime::SubstrateExhausted);
//! assert!(first_plateau.is_none());
//! # Ok::<(), pcrsim_core::types::PcrError>(())
//! ```

use std::iter::FusedIterator;

use crate::config::KineticParameters;
use crate::constants::{
    AVOGADRO, BALANCED_GC_FRACTION, NUCLEOTIDE_USAGE_BASELINE, POLYMERASE_MOLES_PER_UNIT_CYCLE,
    REANNEALING_RATE_CONSTANT,
};
use crate::results::Trajectory;
use crate::types::{CycleRecord, KineticLimit, Molar, PcrError, Regime};

/// Constants derived once from [`KineticParameters`] at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticConstants {
    /// Re-annealing rate constant `k`
    pub reannealing_rate: f64,
    /// Annealing step duration `t` in seconds
    pub annealing_sec: f64,
    /// Product the polymerase can add per cycle (`c_phusion`)
    pub enzyme_capacity: Molar,
    /// Initial nucleotide pool in molecules
    pub free_nucleotides: f64,
    /// Nucleotide molecules consumed per product molecule
    pub nucleotide_usage: f64,
}

impl KineticConstants {
    /// Derives the per-run constants from validated parameters.
    #[must_use]
    pub fn derive(parameters: &KineticParameters) -> Self {
        Self {
            reannealing_rate: REANNEALING_RATE_CONSTANT,
            annealing_sec: parameters.annealing_sec,
            enzyme_capacity: parameters.units * POLYMERASE_MOLES_PER_UNIT_CYCLE,
            free_nucleotides: parameters.nucleotide_molarity * AVOGADRO,
            nucleotide_usage: nucleotide_usage(parameters.length, parameters.gc_fraction),
        }
    }
}

/// Nucleotide molecules drawn from the pool per product molecule.
///
/// Products far from 50% GC are weighted as drawing more heavily on the
/// pool: `length * (0.5 + |gc - 0.5|)`.
#[must_use]
pub fn nucleotide_usage(length: usize, gc_fraction: f64) -> f64 {
    length as f64 * (NUCLEOTIDE_USAGE_BASELINE + (gc_fraction - BALANCED_GC_FRACTION).abs())
}

/// Mutable state carried from one cycle to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionState {
    /// Product concentration
    pub concentration: Molar,
    /// Remaining nucleotide molecules; negative once the pool is exhausted
    pub free_nucleotides: f64,
}

impl ReactionState {
    /// Runs one cycle, returning the next state and the branch taken.
    ///
    /// The returned flag is `true` when the nucleotide check rejected the
    /// cycle's increment.
    #[must_use]
    pub fn advance(self, constants: &KineticConstants) -> (Self, KineticLimit, bool) {
        let previous = self.concentration;
        let annealing_term = constants.reannealing_rate * previous * constants.annealing_sec;

        let reassociation_increment = previous / (1.0 + annealing_term);
        // c·(2 + kct)/(1 + kct) written as c + c/(1 + kct) stays finite when kct overflows
        let (limit, candidate) = if reassociation_increment > constants.enzyme_capacity {
            (KineticLimit::Enzyme, previous + constants.enzyme_capacity)
        } else {
            (KineticLimit::Template, previous + reassociation_increment)
        };

        let new_molecules = (candidate - previous) * AVOGADRO;
        let free_nucleotides = self.free_nucleotides - constants.nucleotide_usage * new_molecules;
        let exhausted = free_nucleotides < 0.0;

        let next = Self {
            concentration: if exhausted { previous } else { candidate },
            free_nucleotides,
        };
        (next, limit, exhausted)
    }
}

/// Simulates amplification under one validated set of kinetic parameters.
///
/// Construction validates the parameters; each call to [`cycles`](Self::cycles)
/// or [`simulate`](Self::simulate) only has to check the starting
/// concentration, after which the cycle loop cannot fail.
#[derive(Debug, Clone)]
pub struct AmplificationSimulator {
    parameters: KineticParameters,
    constants: KineticConstants,
}

impl AmplificationSimulator {
    /// Creates a simulator after validating `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] if any parameter is out of range.
    pub fn new(parameters: KineticParameters) -> Result<Self, PcrError> {
        parameters.validate()?;
        let constants = KineticConstants::derive(&parameters);
        Ok(Self {
            parameters,
            constants,
        })
    }

    /// Parameters this simulator was built with
    #[must_use]
    pub const fn parameters(&self) -> &KineticParameters {
        &self.parameters
    }

    /// Constants derived from the parameters
    #[must_use]
    pub const fn constants(&self) -> &KineticConstants {
        &self.constants
    }

    /// Returns a lazy iterator over the cycles of a run.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] if `initial_concentration` is not a
    /// positive finite number.
    pub fn cycles(&self, initial_concentration: Molar) -> Result<CycleIter, PcrError> {
        validate_initial_concentration(initial_concentration)?;
        Ok(CycleIter {
            constants: self.constants,
            state: ReactionState {
                concentration: initial_concentration,
                free_nucleotides: self.constants.free_nucleotides,
            },
            cycle: 0,
            total_cycles: self.parameters.cycles,
            last_regime: None,
        })
    }

    /// Runs every cycle and returns the finished trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] if `initial_concentration` is not a
    /// positive finite number.
    pub fn simulate(&self, initial_concentration: Molar) -> Result<Trajectory, PcrError> {
        let cycles = self.cycles(initial_concentration)?;
        let mut trajectory = Trajectory::with_capacity(initial_concentration, cycles.len());
        for record in cycles {
            trajectory.push(record);
        }

        log::debug!(
            "Simulated {} cycles: {:.4e} M -> {:.4e} M{}",
            trajectory.cycles(),
            trajectory.initial_concentration(),
            trajectory.final_concentration(),
            trajectory
                .plateau_cycle()
                .map(|cycle| format!(" (plateau from cycle {cycle})"))
                .unwrap_or_default()
        );
        Ok(trajectory)
    }
}

/// Simulates `parameters.cycles` cycles starting from `initial_concentration`.
///
/// # Errors
///
/// Returns [`PcrError::InvalidInput`] for an invalid starting concentration
/// or out-of-range parameters; no cycle runs in that case.
pub fn simulate(
    initial_concentration: Molar,
    parameters: &KineticParameters,
) -> Result<Trajectory, PcrError> {
    AmplificationSimulator::new(parameters.clone())?.simulate(initial_concentration)
}

fn validate_initial_concentration(initial_concentration: Molar) -> Result<(), PcrError> {
    if initial_concentration.is_finite() && initial_concentration > 0.0 {
        Ok(())
    } else {
        Err(PcrError::InvalidInput(format!(
            "initial concentration must be positive, got {initial_concentration}"
        )))
    }
}

/// Iterator yielding one [`CycleRecord`] per simulated cycle.
#[derive(Debug, Clone)]
pub struct CycleIter {
    constants: KineticConstants,
    state: ReactionState,
    cycle: usize,
    total_cycles: usize,
    last_regime: Option<Regime>,
}

impl CycleIter {
    /// State after the most recently yielded cycle
    #[must_use]
    pub const fn state(&self) -> ReactionState {
        self.state
    }
}

impl Iterator for CycleIter {
    type Item = CycleRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cycle >= self.total_cycles {
            return None;
        }
        self.cycle += 1;

        let (next, kinetic_limit, substrate_exhausted) = self.state.advance(&self.constants);
        self.state = next;

        let record = CycleRecord {
            cycle: self.cycle,
            concentration: next.concentration,
            kinetic_limit,
            substrate_exhausted,
            free_nucleotides: next.free_nucleotides,
        };

        let regime = record.regime();
        if self.last_regime != Some(regime) {
            log::debug!("Cycle {}: entering {} regime", record.cycle, regime);
            if substrate_exhausted {
                log::debug!(
                    "Nucleotide pool exhausted at cycle {}; product plateaus at {:.4e} M",
                    record.cycle,
                    record.concentration
                );
            }
            self.last_regime = Some(regime);
        }

        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_cycles - self.cycle;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CycleIter {}

impl FusedIterator for CycleIter {}
