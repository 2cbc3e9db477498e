use crate::constants::{
    DEFAULT_ANNEALING_SEC, DEFAULT_CYCLES, DEFAULT_ENZYME_UNITS, DEFAULT_NUCLEOTIDE_MOLARITY,
    DEFAULT_PRODUCT_GC_FRACTION, DEFAULT_PRODUCT_LENGTH, DEFAULT_REACTION_VOLUME_UL,
    DEFAULT_TEMPLATE_NG,
};
use crate::types::PcrError;

/// Output format options for simulation results.
///
/// # Formats
///
/// - **Summary**: Human-readable block with the final yield
/// - **Tsv**: One tab-separated row per cycle, including the initial value
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::config::{OutputFormat, PcrConfig};
///
/// let config = PcrConfig {
///     output_format: OutputFormat::Tsv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Final concentration, mass and ng/µl with the run's parameters.
    #[default]
    Summary,

    /// Full trajectory as `cycle`, `concentration_molar`, `regime` columns.
    ///
    /// Suitable for charting on a logarithmic concentration axis.
    Tsv,
}

/// Kinetic configuration for one simulation run.
///
/// All fields are plain values; [`KineticParameters::validate`] checks their
/// domains and is called by the simulator before any cycle runs.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::config::KineticParameters;
///
/// let params = KineticParameters {
///     cycles: 25,
///     gc_fraction: 0.62,
///     ..Default::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KineticParameters {
    /// Number of thermocycler cycles to simulate.
    ///
    /// Zero is valid and yields a trajectory holding only the initial value.
    ///
    /// **Default**: `35`
    pub cycles: usize,

    /// Duration of the annealing step in seconds. Must be positive.
    ///
    /// **Default**: `30.0`
    pub annealing_sec: f64,

    /// Product length in bases. Must be positive.
    ///
    /// **Default**: `1000`
    pub length: usize,

    /// GC fraction of the product, within `[0, 1]`.
    ///
    /// **Default**: `0.5`
    pub gc_fraction: f64,

    /// Polymerase units in the reaction. Must be non-negative.
    ///
    /// **Default**: `1.0`
    pub units: f64,

    /// Free nucleotide amount in moles. Must be non-negative.
    ///
    /// **Default**: `0.0002`
    pub nucleotide_molarity: f64,
}

impl Default for KineticParameters {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            annealing_sec: DEFAULT_ANNEALING_SEC,
            length: DEFAULT_PRODUCT_LENGTH,
            gc_fraction: DEFAULT_PRODUCT_GC_FRACTION,
            units: DEFAULT_ENZYME_UNITS,
            nucleotide_molarity: DEFAULT_NUCLEOTIDE_MOLARITY,
        }
    }
}

impl KineticParameters {
    /// Checks every field against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PcrError> {
        if !(self.annealing_sec.is_finite() && self.annealing_sec > 0.0) {
            return Err(PcrError::InvalidInput(format!(
                "annealing time must be positive, got {} s",
                self.annealing_sec
            )));
        }
        if self.length == 0 {
            return Err(PcrError::InvalidInput(
                "product length must be at least one base".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.gc_fraction) {
            return Err(PcrError::InvalidInput(format!(
                "gc fraction must be within [0, 1], got {}",
                self.gc_fraction
            )));
        }
        if !(self.units.is_finite() && self.units >= 0.0) {
            return Err(PcrError::InvalidInput(format!(
                "enzyme units must be non-negative, got {}",
                self.units
            )));
        }
        if !(self.nucleotide_molarity.is_finite() && self.nucleotide_molarity >= 0.0) {
            return Err(PcrError::InvalidInput(format!(
                "nucleotide amount must be non-negative, got {}",
                self.nucleotide_molarity
            )));
        }
        Ok(())
    }
}

/// Bench-side quantities used to convert between mass and molar amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionSetup {
    /// Template mass added to the reaction, in nanograms.
    ///
    /// **Default**: `10.0`
    pub template_ng: f64,

    /// Final reaction volume in microliters.
    ///
    /// **Default**: `50.0`
    pub reaction_volume_ul: f64,
}

impl Default for ReactionSetup {
    fn default() -> Self {
        Self {
            template_ng: DEFAULT_TEMPLATE_NG,
            reaction_volume_ul: DEFAULT_REACTION_VOLUME_UL,
        }
    }
}

impl ReactionSetup {
    /// Checks that both quantities are positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] for a non-positive mass or volume.
    pub fn validate(&self) -> Result<(), PcrError> {
        if !(self.template_ng.is_finite() && self.template_ng > 0.0) {
            return Err(PcrError::InvalidInput(format!(
                "template mass must be positive, got {} ng",
                self.template_ng
            )));
        }
        if !(self.reaction_volume_ul.is_finite() && self.reaction_volume_ul > 0.0) {
            return Err(PcrError::InvalidInput(format!(
                "reaction volume must be positive, got {} µl",
                self.reaction_volume_ul
            )));
        }
        Ok(())
    }
}

/// Configuration settings for a full template-to-yield analysis.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::config::{KineticParameters, PcrConfig};
///
/// let config = PcrConfig {
///     parameters: KineticParameters {
///         cycles: 30,
///         ..Default::default()
///     },
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct PcrConfig {
    /// Kinetic parameters for the simulator.
    ///
    /// When a product sequence is analyzed, its base count and GC fraction
    /// replace `length` and `gc_fraction`.
    pub parameters: KineticParameters,

    /// Template mass and reaction volume.
    pub reaction: ReactionSetup,

    /// Output format for [`crate::output::write_results`].
    ///
    /// **Default**: [`OutputFormat::Summary`]
    pub output_format: OutputFormat,

    /// Suppress informational log output.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Number of threads used for base counting.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,
}
