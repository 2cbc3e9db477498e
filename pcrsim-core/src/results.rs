use crate::config::KineticParameters;
use crate::constants::NANOGRAMS_PER_GRAM;
use crate::sequence::SequenceProfile;
use crate::types::{CycleRecord, Molar, PcrError, Regime};

/// Ordered product concentrations of one simulation run.
///
/// Index 0 holds the starting concentration and index `i` the concentration
/// after cycle `i`, so a run of `n` cycles has `n + 1` entries. The
/// simulator appends while it runs; afterwards the trajectory is read-only.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::config::KineticParameters;
/// use pcrsim_core::kinetics::simulate;
///
/// let params = KineticParameters { cycles: 10, ..Default::default() };
/// let trajectory = simulate(1.0e-15, &params)?;
///
/// assert_eq!(trajectory.len(), 11);
/// assert_eq!(trajectory.initial_concentration(), 1.0e-15);
/// assert!(trajectory.final_concentration() > 1.0e-15);
/// # Ok::<(), pcrsim_core::types::PcrError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    concentrations: Vec<Molar>,
    records: Vec<CycleRecord>,
}

impl Trajectory {
    pub(crate) fn with_capacity(initial_concentration: Molar, cycles: usize) -> Self {
        let mut concentrations = Vec::with_capacity(cycles + 1);
        concentrations.push(initial_concentration);
        Self {
            concentrations,
            records: Vec::with_capacity(cycles),
        }
    }

    pub(crate) fn push(&mut self, record: CycleRecord) {
        self.concentrations.push(record.concentration);
        self.records.push(record);
    }

    /// Number of entries, including the initial value
    #[must_use]
    pub fn len(&self) -> usize {
        self.concentrations.len()
    }

    /// Always `false`; a trajectory holds at least its starting value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concentrations.is_empty()
    }

    /// Number of simulated cycles
    #[must_use]
    pub fn cycles(&self) -> usize {
        self.records.len()
    }

    /// Concentrations indexed by cycle
    #[must_use]
    pub fn concentrations(&self) -> &[Molar] {
        &self.concentrations
    }

    /// Per-cycle diagnostics; entry `i` describes cycle `i + 1`
    #[must_use]
    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    /// Concentration before the first cycle
    #[must_use]
    pub fn initial_concentration(&self) -> Molar {
        self.concentrations[0]
    }

    /// Concentration after the last cycle
    #[must_use]
    pub fn final_concentration(&self) -> Molar {
        self.concentrations[self.concentrations.len() - 1]
    }

    /// Regime of every cycle in order
    #[must_use]
    pub fn regimes(&self) -> Vec<Regime> {
        self.records.iter().map(CycleRecord::regime).collect()
    }

    /// First cycle rolled back for lack of nucleotides, if any.
    ///
    /// Every later entry of the trajectory equals the entry before this cycle.
    #[must_use]
    pub fn plateau_cycle(&self) -> Option<usize> {
        self.records
            .iter()
            .find(|record| record.substrate_exhausted)
            .map(|record| record.cycle)
    }
}

/// Final product expressed as molar amount, mass and concentration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductYield {
    /// Final molar amount of product
    pub molar: Molar,
    /// Product mass in grams
    pub mass_g: f64,
    /// Product concentration in the reaction, ng/µl
    pub ng_per_ul: f64,
}

impl ProductYield {
    /// Converts a final molar amount into mass and ng/µl.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] for a non-positive reaction volume
    /// or product molar mass.
    pub fn from_molar(
        molar: Molar,
        product_molar_mass: f64,
        reaction_volume_ul: f64,
    ) -> Result<Self, PcrError> {
        if !(product_molar_mass.is_finite() && product_molar_mass > 0.0) {
            return Err(PcrError::InvalidInput(format!(
                "product molar mass must be positive, got {product_molar_mass}"
            )));
        }
        if !(reaction_volume_ul.is_finite() && reaction_volume_ul > 0.0) {
            return Err(PcrError::InvalidInput(format!(
                "reaction volume must be positive, got {reaction_volume_ul} µl"
            )));
        }
        let mass_g = molar * product_molar_mass;
        Ok(Self {
            molar,
            mass_g,
            ng_per_ul: mass_g * NANOGRAMS_PER_GRAM / reaction_volume_ul,
        })
    }
}

/// Complete results of a template-to-yield analysis.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::{PcrAnalyzer, config::PcrConfig};
///
/// let analyzer = PcrAnalyzer::new(PcrConfig::default());
/// let results = analyzer.analyze_sequences(
///     &"ACGT".repeat(2_000),
///     &"GATTACA".repeat(100),
/// )?;
///
/// println!("{} cycles", results.trajectory.cycles());
/// println!("{:.2} ng/µl", results.product_yield.ng_per_ul);
/// # Ok::<(), pcrsim_core::types::PcrError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PcrResults {
    /// Concentration trajectory of the run
    pub trajectory: Trajectory,

    /// Kinetic parameters the run actually used.
    ///
    /// Product length and GC fraction reflect the product sequence when one
    /// was analyzed.
    pub parameters: KineticParameters,

    /// Composition of the template, when the starting amount came from one
    pub template: Option<SequenceProfile>,

    /// Molar mass used for the yield conversion
    pub product_molar_mass: f64,

    /// Composition of the product, when given as a sequence
    pub product: Option<SequenceProfile>,

    /// Final yield derived from the last trajectory entry
    pub product_yield: ProductYield,
}
