//! Sequence composition analysis.
//!
//! This module turns a nucleotide sequence into the two scalars the
//! simulator's collaborators need: its GC fraction and its molar mass.
//!
//! ## Overview
//!
//! Only A, C, G and T (either case) are counted; every other character is
//! ignored. Molar mass assumes double-stranded DNA with average base-pair
//! masses of 617.41 g/mol for A/T and 618.39 g/mol for G/C.
//!
//! ## Modules
//!
//! - [`composition`]: Parallel base counting
//! - [`io`]: FASTA and plain-text sequence sources
//!
//! ## Examples
//!
//! ```rust
//! use pcrsim_core::sequence::SequenceProfile;
//!
//! let profile = SequenceProfile::from_sequence(b"ATGCGC")?;
//! assert_eq!(profile.length, 6);
//! assert!((profile.gc_fraction - 4.0 / 6.0).abs() < 1e-12);
//! # Ok::<(), pcrsim_core::types::PcrError>(())
//! ```

use crate::constants::{AT_PAIR_MOLAR_MASS, GC_PAIR_MOLAR_MASS};
use crate::types::PcrError;

pub mod composition;
pub mod io;

pub use composition::BaseComposition;
pub use io::*;

/// Molar mass of a double-stranded sequence of `length` base pairs.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::sequence::molar_mass;
///
/// assert_eq!(molar_mass(1, 0.0), 617.41);
/// assert_eq!(molar_mass(1, 1.0), 618.39);
/// ```
#[must_use]
pub fn molar_mass(length: usize, gc_fraction: f64) -> f64 {
    length as f64 * (AT_PAIR_MOLAR_MASS * (1.0 - gc_fraction) + GC_PAIR_MOLAR_MASS * gc_fraction)
}

/// Length, GC fraction and molar mass of an analyzed sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceProfile {
    /// Number of recognized bases
    pub length: usize,
    /// Fraction of recognized bases that are G or C
    pub gc_fraction: f64,
    /// Molar mass in g/mol
    pub molar_mass: f64,
}

impl SequenceProfile {
    /// Builds a profile from base counts.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::NoBasesFound`] if no base was counted.
    pub fn from_composition(composition: &BaseComposition) -> Result<Self, PcrError> {
        let length = composition.total();
        if length == 0 {
            return Err(PcrError::NoBasesFound);
        }
        let gc_fraction = composition.gc() as f64 / length as f64;
        Ok(Self {
            length,
            gc_fraction,
            molar_mass: molar_mass(length, gc_fraction),
        })
    }

    /// Counts bases in a raw sequence and builds its profile.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::NoBasesFound`] if the sequence has no A, C, G or T.
    pub fn from_sequence(sequence: &[u8]) -> Result<Self, PcrError> {
        Self::from_composition(&BaseComposition::count(sequence))
    }
}
