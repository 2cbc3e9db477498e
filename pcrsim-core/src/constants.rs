// =============================================================================
// Physical constants
// =============================================================================

/// Version string for pcrsim
pub const VERSION: &str = "0.1.0";

/// Avogadro's number (molecules per mole)
pub const AVOGADRO: f64 = 6.022_140_857e23;

// =============================================================================
// Kinetic model
// =============================================================================

/// Empirical re-annealing rate constant `k` (per molar per second).
///
/// Template and product strands re-anneal during the annealing step at a
/// rate proportional to `k * c * t`, competing with primer binding.
pub const REANNEALING_RATE_CONSTANT: f64 = 3.0e5;

/// Moles of product one unit of polymerase can extend per cycle.
///
/// Derived from manufacturer throughput for a high-fidelity polymerase
/// (1 unit extends 10 nmol of nucleotides in 30 minutes at roughly 4 kb/min).
pub const POLYMERASE_MOLES_PER_UNIT_CYCLE: f64 = 8.333e-14;

/// Baseline fraction of the product length drawn from the nucleotide pool
pub const NUCLEOTIDE_USAGE_BASELINE: f64 = 0.5;

/// GC fraction at which nucleotide usage is lowest
pub const BALANCED_GC_FRACTION: f64 = 0.5;

// =============================================================================
// Sequence composition
// =============================================================================

/// Average molar mass of an A/T base pair in double-stranded DNA (g/mol)
pub const AT_PAIR_MOLAR_MASS: f64 = 617.41;

/// Average molar mass of a G/C base pair in double-stranded DNA (g/mol)
pub const GC_PAIR_MOLAR_MASS: f64 = 618.39;

/// Bytes counted per rayon task when tallying bases
pub const COMPOSITION_CHUNK_SIZE: usize = 64 * 1024;

// =============================================================================
// Unit conversion
// =============================================================================

/// Nanograms per gram
pub const NANOGRAMS_PER_GRAM: f64 = 1.0e9;

// =============================================================================
// Defaults
// =============================================================================

/// Default number of thermocycler cycles
pub const DEFAULT_CYCLES: usize = 35;

/// Default annealing step duration in seconds
pub const DEFAULT_ANNEALING_SEC: f64 = 30.0;

/// Default product length in bases
pub const DEFAULT_PRODUCT_LENGTH: usize = 1000;

/// Default polymerase units per reaction
pub const DEFAULT_ENZYME_UNITS: f64 = 1.0;

/// Default GC fraction of the product
pub const DEFAULT_PRODUCT_GC_FRACTION: f64 = 0.5;

/// Default free nucleotide amount (mol)
pub const DEFAULT_NUCLEOTIDE_MOLARITY: f64 = 0.0002;

/// Default template mass added to the reaction (ng)
pub const DEFAULT_TEMPLATE_NG: f64 = 10.0;

/// Default reaction volume (µl)
pub const DEFAULT_REACTION_VOLUME_UL: f64 = 50.0;

// =============================================================================
// Testing
// =============================================================================

/// Starting concentration used by the reference scenario in tests
pub const TEST_INITIAL_CONCENTRATION: f64 = 1.0e-9;
