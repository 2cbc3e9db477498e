use crate::config::{KineticParameters, PcrConfig};
use crate::constants::NANOGRAMS_PER_GRAM;
use crate::kinetics::AmplificationSimulator;
use crate::results::{PcrResults, ProductYield};
use crate::sequence::{SequenceProfile, molar_mass, profile_source};
use crate::types::{Molar, PcrError};

/// What the reaction starts from.
///
/// A template is given as a file path or literal sequence; its molar mass
/// and the configured template mass determine the starting amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartingMaterial<'a> {
    /// Starting product concentration given directly
    Molar(Molar),
    /// Template sequence (path or literal bases)
    Template(&'a str),
}

/// High-level PCR analyzer running the whole template-to-yield pipeline.
///
/// The analyzer profiles the template and product sequences, derives the
/// starting amount, runs the [`AmplificationSimulator`] and converts the
/// final amount into a mass concentration.
///
/// # Examples
///
/// ## Start from a known concentration
///
/// ```rust
/// use pcrsim_core::{PcrAnalyzer, StartingMaterial, config::PcrConfig};
///
/// let analyzer = PcrAnalyzer::new(PcrConfig::default());
/// let results = analyzer.analyze(StartingMaterial::Molar(1.0e-12), None)?;
///
/// assert_eq!(results.trajectory.len(), 36);
/// # Ok::<(), pcrsim_core::types::PcrError>(())
/// ```
///
/// ## Start from sequence files
///
/// ```rust,no_run
/// use pcrsim_core::{PcrAnalyzer, config::PcrConfig};
///
/// let analyzer = PcrAnalyzer::new(PcrConfig::default());
/// let results = analyzer.analyze_sequences("genome.fasta", "amplicon.fasta")?;
///
/// println!("Final concentration: {:.3} ng/µl", results.product_yield.ng_per_ul);
/// # Ok::<(), pcrsim_core::types::PcrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PcrAnalyzer {
    pub config: PcrConfig,
}

impl PcrAnalyzer {
    /// Creates an analyzer without touching the global thread pool
    pub const fn new(config: PcrConfig) -> Self {
        Self { config }
    }

    /// Creates an analyzer and sizes the rayon pool from `config.num_threads`.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] if the global pool was already
    /// built or cannot be configured.
    pub fn with_config(config: PcrConfig) -> Result<Self, PcrError> {
        if let Some(num_threads) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    PcrError::InvalidInput(format!("Failed to configure thread pool: {}", e))
                })?;
        }
        Ok(Self::new(config))
    }

    /// Molar amount of template in the reaction.
    ///
    /// Computed as `template_ng / 1e9 / molar_mass`.
    #[must_use]
    pub fn starting_amount(&self, template: &SequenceProfile) -> Molar {
        self.config.reaction.template_ng / NANOGRAMS_PER_GRAM / template.molar_mass
    }

    /// Runs the simulation and yield conversion.
    ///
    /// When `product` is given, its base count and GC fraction override the
    /// configured product length and GC fraction, and its molar mass is used
    /// for the yield. Otherwise the molar mass is computed from the
    /// configured length and GC fraction.
    ///
    /// # Errors
    ///
    /// Returns [`PcrError::InvalidInput`] for out-of-range configuration,
    /// [`PcrError::NoBasesFound`] for a sequence without bases, and I/O or
    /// parse errors from reading sequence files.
    pub fn analyze(
        &self,
        start: StartingMaterial<'_>,
        product: Option<&str>,
    ) -> Result<PcrResults, PcrError> {
        self.config.reaction.validate()?;

        let (initial_concentration, template) = match start {
            StartingMaterial::Molar(molar) => (molar, None),
            StartingMaterial::Template(source) => {
                let profile = profile_source(source)?;
                (self.starting_amount(&profile), Some(profile))
            }
        };

        let product = product.map(profile_source).transpose()?;
        let parameters = match &product {
            Some(profile) => KineticParameters {
                length: profile.length,
                gc_fraction: profile.gc_fraction,
                ..self.config.parameters.clone()
            },
            None => self.config.parameters.clone(),
        };
        let product_molar_mass = product.map_or_else(
            || molar_mass(parameters.length, parameters.gc_fraction),
            |profile| profile.molar_mass,
        );

        if !self.config.quiet {
            log::info!(
                "Simulating {} cycles from {:.4e} M ({} bp product, {:.1}% GC, {} U polymerase)",
                parameters.cycles,
                initial_concentration,
                parameters.length,
                parameters.gc_fraction * 100.0,
                parameters.units
            );
        }

        let simulator = AmplificationSimulator::new(parameters)?;
        let trajectory = simulator.simulate(initial_concentration)?;
        let product_yield = ProductYield::from_molar(
            trajectory.final_concentration(),
            product_molar_mass,
            self.config.reaction.reaction_volume_ul,
        )?;

        if !self.config.quiet {
            log::info!(
                "Simulated PCR yield: {:.4} ng/µl ({:.4e} g product)",
                product_yield.ng_per_ul,
                product_yield.mass_g
            );
        }

        Ok(PcrResults {
            trajectory,
            parameters: simulator.parameters().clone(),
            template,
            product_molar_mass,
            product,
            product_yield,
        })
    }

    /// Analyzes a template and a product given as paths or literal sequences.
    ///
    /// # Errors
    ///
    /// See [`PcrAnalyzer::analyze`].
    pub fn analyze_sequences(&self, template: &str, product: &str) -> Result<PcrResults, PcrError> {
        self.analyze(StartingMaterial::Template(template), Some(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReactionSetup;
    use crate::constants::TEST_INITIAL_CONCENTRATION;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PRODUCT: &str = "GATTACAGGCCATTGACCAGT";

    fn create_template_sequence() -> String {
        "ATGAAACGTCGTCGTCGTCGTAAATAG".repeat(400)
    }

    #[test]
    fn test_analyze_from_concentration_uses_configured_product() {
        let analyzer = PcrAnalyzer::new(PcrConfig::default());
        let results = analyzer
            .analyze(StartingMaterial::Molar(TEST_INITIAL_CONCENTRATION), None)
            .unwrap();

        assert!(results.template.is_none());
        assert!(results.product.is_none());
        assert_eq!(results.parameters, KineticParameters::default());
        assert_eq!(results.trajectory.len(), 36);
        assert!((results.product_molar_mass - molar_mass(1000, 0.5)).abs() < 1e-6);

        let expected_ng_per_ul = results.trajectory.final_concentration()
            * results.product_molar_mass
            * 1.0e9
            / 50.0;
        assert!((results.product_yield.ng_per_ul - expected_ng_per_ul).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_sequences_derives_start_and_product() {
        let template = create_template_sequence();
        let analyzer = PcrAnalyzer::new(PcrConfig::default());
        let results = analyzer.analyze_sequences(&template, PRODUCT).unwrap();

        let template_profile = results.template.unwrap();
        assert_eq!(template_profile.length, template.len());
        let expected_start = 10.0 / 1.0e9 / template_profile.molar_mass;
        assert!(
            (results.trajectory.initial_concentration() - expected_start).abs()
                <= expected_start * 1e-12
        );

        let product_profile = results.product.unwrap();
        assert_eq!(product_profile.length, PRODUCT.len());
        assert_eq!(results.parameters.length, PRODUCT.len());
        assert_eq!(results.parameters.gc_fraction, product_profile.gc_fraction);
        assert_eq!(results.product_molar_mass, product_profile.molar_mass);
    }

    #[test]
    fn test_analyze_reads_fasta_template() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">template").unwrap();
        writeln!(file, "{}", create_template_sequence()).unwrap();
        file.flush().unwrap();

        let analyzer = PcrAnalyzer::new(PcrConfig::default());
        let from_file = analyzer
            .analyze_sequences(file.path().to_str().unwrap(), PRODUCT)
            .unwrap();
        let from_literal = analyzer
            .analyze_sequences(&create_template_sequence(), PRODUCT)
            .unwrap();
        assert_eq!(from_file.trajectory, from_literal.trajectory);
    }

    #[test]
    fn test_template_without_bases() {
        let analyzer = PcrAnalyzer::new(PcrConfig::default());
        assert!(matches!(
            analyzer.analyze_sequences("NNNNNNNN", PRODUCT),
            Err(PcrError::NoBasesFound)
        ));
    }

    #[test]
    fn test_invalid_concentration_and_reaction() {
        let analyzer = PcrAnalyzer::new(PcrConfig::default());
        assert!(matches!(
            analyzer.analyze(StartingMaterial::Molar(0.0), None),
            Err(PcrError::InvalidInput(_))
        ));

        let analyzer = PcrAnalyzer::new(PcrConfig {
            reaction: ReactionSetup {
                reaction_volume_ul: 0.0,
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(matches!(
            analyzer.analyze(StartingMaterial::Molar(1.0e-12), None),
            Err(PcrError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_starting_amount_scales_with_template_mass() {
        let profile = SequenceProfile::from_sequence(b"ACGT").unwrap();
        let analyzer = PcrAnalyzer::new(PcrConfig {
            reaction: ReactionSetup {
                template_ng: 20.0,
                ..Default::default()
            },
            ..Default::default()
        });
        let default_analyzer = PcrAnalyzer::default();
        let ratio = analyzer.starting_amount(&profile) / default_analyzer.starting_amount(&profile);
        assert!((ratio - 2.0).abs() < 1e-12);
    }
}
