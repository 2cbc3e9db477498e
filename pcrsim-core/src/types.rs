use std::fmt;

use thiserror::Error;

/// Concentration of amplified product in moles per liter.
pub type Molar = f64;

/// Which kinetic ceiling bounded a cycle's increment.
///
/// Chosen each cycle by comparing the reassociation-limited increment
/// against the polymerase capacity.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::types::KineticLimit;
///
/// assert_eq!(KineticLimit::Enzyme.to_string(), "enzyme-limited");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KineticLimit {
    /// Polymerase throughput capped the increment
    Enzyme,
    /// Template re-annealing capped the increment
    Template,
}

impl fmt::Display for KineticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enzyme => write!(f, "enzyme-limited"),
            Self::Template => write!(f, "template-limited"),
        }
    }
}

/// Regime a cycle ended in.
///
/// Substrate exhaustion overrides whichever kinetic branch produced the
/// candidate concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Increment capped by polymerase throughput
    EnzymeLimited,
    /// Increment capped by re-annealing kinetics
    TemplateLimited,
    /// Nucleotide pool could not cover the increment; no net amplification
    SubstrateExhausted,
}

impl Regime {
    /// Short label used in tabular output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnzymeLimited => "enzyme-limited",
            Self::TemplateLimited => "template-limited",
            Self::SubstrateExhausted => "substrate-exhausted",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<KineticLimit> for Regime {
    fn from(limit: KineticLimit) -> Self {
        match limit {
            KineticLimit::Enzyme => Self::EnzymeLimited,
            KineticLimit::Template => Self::TemplateLimited,
        }
    }
}

/// Diagnostic record of one completed cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleRecord {
    /// One-based cycle index (index 0 of a trajectory is the initial value)
    pub cycle: usize,
    /// Product concentration after the cycle
    pub concentration: Molar,
    /// Kinetic branch selected by the regime test
    pub kinetic_limit: KineticLimit,
    /// Whether the nucleotide check rolled the cycle back
    pub substrate_exhausted: bool,
    /// Free nucleotide molecules left after the cycle's decrement
    pub free_nucleotides: f64,
}

impl CycleRecord {
    /// Three-valued regime of the cycle
    #[must_use]
    pub fn regime(&self) -> Regime {
        if self.substrate_exhausted {
            Regime::SubstrateExhausted
        } else {
            self.kinetic_limit.into()
        }
    }
}

/// Error types that can occur while preparing or running a simulation
#[derive(Error, Debug)]
pub enum PcrError {
    /// Configuration value outside its valid domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Sequence contained no A, T, C or G
    #[error("No bases could be identified in supplied sequence")]
    NoBasesFound,
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}
