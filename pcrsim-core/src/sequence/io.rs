use std::fs;
use std::path::Path;

use bio::io::fasta;
use rayon::prelude::*;

use crate::sequence::{BaseComposition, SequenceProfile};
use crate::types::PcrError;

/// Identifier, optional description and raw sequence of one FASTA record
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Reads all records of a FASTA file using rust-bio
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, PcrError> {
    let bytes = fs::read(path)?;
    parse_fasta(&bytes)
}

fn parse_fasta(bytes: &[u8]) -> Result<Vec<FastaRecord>, PcrError> {
    let reader = fasta::Reader::new(bytes);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| PcrError::ParseError(e.to_string()))?;
        sequences.push((
            record.id().to_string(),
            record.desc().map(String::from),
            record.seq().to_vec(),
        ));
    }

    Ok(sequences)
}

/// Counts the bases of a sequence file.
///
/// Files whose first non-blank byte is `>` are parsed as FASTA and the
/// counts of all records are summed. Anything else is read as plain text,
/// skipping header lines.
pub fn composition_from_file<P: AsRef<Path>>(path: P) -> Result<BaseComposition, PcrError> {
    let bytes = fs::read(path.as_ref())?;
    let is_fasta = bytes
        .iter()
        .find(|byte| !byte.is_ascii_whitespace())
        .is_some_and(|&byte| byte == b'>');

    if is_fasta {
        let records = parse_fasta(&bytes)?;
        log::debug!(
            "Read {} FASTA record(s) from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(records
            .par_iter()
            .map(|(_, _, sequence)| BaseComposition::count(sequence))
            .reduce(BaseComposition::default, BaseComposition::merge))
    } else {
        Ok(BaseComposition::count_plain_text(&bytes))
    }
}

/// Profiles a sequence given either as a file path or as literal bases.
///
/// An existing file wins; otherwise `source` itself is analyzed.
///
/// # Errors
///
/// Returns [`PcrError::NoBasesFound`] if no base is recognized, or an I/O or
/// parse error when reading a file fails.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::sequence::profile_source;
///
/// let profile = profile_source("GATTACA")?;
/// assert_eq!(profile.length, 7);
/// # Ok::<(), pcrsim_core::types::PcrError>(())
/// ```
pub fn profile_source(source: &str) -> Result<SequenceProfile, PcrError> {
    let path = Path::new(source);
    let composition = if path.is_file() {
        composition_from_file(path)?
    } else {
        BaseComposition::count_plain_text(source.as_bytes())
    };

    let profile = SequenceProfile::from_composition(&composition)?;
    log::debug!(
        "Counted {} bases ({:.2}% GC, {:.1} g/mol)",
        profile.length,
        profile.gc_fraction * 100.0,
        profile.molar_mass
    );
    Ok(profile)
}
