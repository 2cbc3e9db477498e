//! Output formatting for simulation results.
//!
//! This module provides writers for converting [`PcrResults`] into the two
//! text layouts the command-line tool emits.
//!
//! ## Supported Formats
//!
//! - **Summary**: Run parameters, starting amount and final yield
//! - **TSV**: Per-cycle concentration and regime, ready for charting
//!
//! ## Examples
//!
//! ```rust
//! use pcrsim_core::{PcrAnalyzer, StartingMaterial, config::{OutputFormat, PcrConfig}};
//! use pcrsim_core::output::write_results;
//! use std::io::stdout;
//!
//! let analyzer = PcrAnalyzer::new(PcrConfig::default());
//! let results = analyzer.analyze(StartingMaterial::Molar(1.0e-12), None)?;
//!
//! write_results(&mut stdout(), &results, OutputFormat::Tsv)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{config::OutputFormat, results::PcrResults, types::PcrError};
use std::io::Write;

mod formats {
    pub mod summary;
    pub mod tsv;
}

use formats::{summary::write_summary_format, tsv::write_tsv_format};

/// Writes simulation results in the specified format.
///
/// # Errors
///
/// Returns [`PcrError::IoError`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &PcrResults,
    format: OutputFormat,
) -> Result<(), PcrError> {
    match format {
        OutputFormat::Summary => write_summary_format(writer, results),
        OutputFormat::Tsv => write_tsv_format(writer, results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        PcrAnalyzer, StartingMaterial,
        config::{KineticParameters, PcrConfig},
    };

    fn create_test_results() -> PcrResults {
        let analyzer = PcrAnalyzer::new(PcrConfig {
            parameters: KineticParameters {
                cycles: 5,
                ..Default::default()
            },
            quiet: true,
            ..Default::default()
        });
        analyzer
            .analyze(StartingMaterial::Molar(1.0e-12), None)
            .unwrap()
    }

    #[test]
    fn test_write_results_format_consistency() {
        let results = create_test_results();

        for format in [OutputFormat::Summary, OutputFormat::Tsv] {
            let mut buffer = Vec::new();

            let result = write_results(&mut buffer, &results, format);
            assert!(result.is_ok(), "Failed to write format: {:?}", format);

            let output = String::from_utf8(buffer).unwrap();
            assert!(!output.is_empty(), "Empty output for format: {:?}", format);
            assert!(output.ends_with('\n'));
        }
    }

    #[test]
    fn test_write_results_dispatches_by_format() {
        let results = create_test_results();

        let mut tsv = Vec::new();
        write_results(&mut tsv, &results, OutputFormat::Tsv).unwrap();
        assert!(String::from_utf8(tsv).unwrap().starts_with("cycle\t"));

        let mut summary = Vec::new();
        write_results(&mut summary, &results, OutputFormat::Summary).unwrap();
        assert!(String::from_utf8(summary).unwrap().starts_with("# pcrsim"));
    }
}
