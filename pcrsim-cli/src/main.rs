//! # pcrsim CLI - Command-Line PCR Simulator
//!
//! A command-line interface for the pcrsim amplification model.
//!
//! ## Usage
//!
//! ```bash
//! # Simulate from a known starting concentration
//! pcrsim -c 1e-12
//!
//! # Derive the start from 10 ng of a genome and the product from its sequence
//! pcrsim -t genome.fasta -p amplicon.fasta
//!
//! # Per-cycle trajectory as TSV
//! pcrsim -c 1e-12 -f tsv -o trajectory.tsv
//! ```
//!
//! ## Options
//!
//! - `-c, --concentration <MOLAR>`: Starting product concentration
//! - `-t, --template <FILE|SEQ>`: Template sequence (file or literal bases)
//! - `--template-ng <NG>`: Template mass in the reaction (default: 10)
//! - `-p, --product <FILE|SEQ>`: Product sequence (file or literal bases)
//! - `-l, --length <BP>`: Product length when no product sequence is given (default: 1000)
//! - `-g, --gc <FRACTION>`: Product GC fraction when no product sequence is given (default: 0.5)
//! - `-n, --cycles <N>`: Number of cycles (default: 35)
//! - `-a, --annealing <SEC>`: Annealing time in seconds (default: 30)
//! - `-u, --units <U>`: Polymerase units (default: 1)
//! - `--nucleotides <MOL>`: Free nucleotide amount (default: 0.0002)
//! - `-v, --volume <UL>`: Reaction volume in µl (default: 50)
//! - `-f, --format <FORMAT>`: Output format: summary, tsv (default: summary)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-q, --quiet`: Suppress progress messages
//! - `-j, --threads <N>`: Threads used for base counting (default: all cores)
//!
//! Log verbosity follows `RUST_LOG` when set.

use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};
use pcrsim_core::config::{KineticParameters, OutputFormat, PcrConfig, ReactionSetup};
use pcrsim_core::constants::{
    DEFAULT_ANNEALING_SEC, DEFAULT_CYCLES, DEFAULT_ENZYME_UNITS, DEFAULT_NUCLEOTIDE_MOLARITY,
    DEFAULT_PRODUCT_GC_FRACTION, DEFAULT_PRODUCT_LENGTH, DEFAULT_REACTION_VOLUME_UL,
    DEFAULT_TEMPLATE_NG,
};
use pcrsim_core::output::write_results;
use pcrsim_core::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn build_cli() -> Command {
    Command::new("pcrsim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Discrete-cycle kinetic PCR amplification simulator")
        .arg(
            Arg::new("concentration")
                .short('c')
                .long("concentration")
                .value_name("MOLAR")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Starting product concentration (mol/L)"),
        )
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("FILE|SEQ")
                .help("Template sequence file or literal bases"),
        )
        .group(
            ArgGroup::new("start")
                .args(["concentration", "template"])
                .required(true),
        )
        .arg(
            Arg::new("template-ng")
                .long("template-ng")
                .value_name("NG")
                .value_parser(value_parser!(f64))
                .default_value(DEFAULT_TEMPLATE_NG.to_string())
                .help("Template mass added to the reaction (ng)"),
        )
        .arg(
            Arg::new("product")
                .short('p')
                .long("product")
                .value_name("FILE|SEQ")
                .conflicts_with_all(["length", "gc"])
                .help("Product sequence file or literal bases"),
        )
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .value_name("BP")
                .value_parser(value_parser!(usize))
                .help(format!("Product length in bases [default: {DEFAULT_PRODUCT_LENGTH}]")),
        )
        .arg(
            Arg::new("gc")
                .short('g')
                .long("gc")
                .value_name("FRACTION")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help(format!(
                    "Product GC fraction [default: {DEFAULT_PRODUCT_GC_FRACTION}]"
                )),
        )
        .arg(
            Arg::new("cycles")
                .short('n')
                .long("cycles")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value(DEFAULT_CYCLES.to_string())
                .help("Number of cycles"),
        )
        .arg(
            Arg::new("annealing")
                .short('a')
                .long("annealing")
                .value_name("SEC")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value(DEFAULT_ANNEALING_SEC.to_string())
                .help("Annealing time in seconds"),
        )
        .arg(
            Arg::new("units")
                .short('u')
                .long("units")
                .value_name("U")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value(DEFAULT_ENZYME_UNITS.to_string())
                .help("Polymerase units"),
        )
        .arg(
            Arg::new("nucleotides")
                .long("nucleotides")
                .value_name("MOL")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value(DEFAULT_NUCLEOTIDE_MOLARITY.to_string())
                .help("Free nucleotide amount (mol)"),
        )
        .arg(
            Arg::new("volume")
                .short('v')
                .long("volume")
                .value_name("UL")
                .value_parser(value_parser!(f64))
                .default_value(DEFAULT_REACTION_VOLUME_UL.to_string())
                .help("Reaction volume (µl)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: summary, tsv")
                .default_value("summary"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Threads used for base counting"),
        )
}

/// Main entry point for the pcrsim CLI application.
///
/// Parses command-line arguments, configures the analyzer, runs the
/// simulation and writes results in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();

    let quiet = matches.get_flag("quiet");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if quiet { "warn" } else { "info" }),
    )
    .init();

    let output_format = match matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("summary")
    {
        "summary" => OutputFormat::Summary,
        "tsv" => OutputFormat::Tsv,
        _ => return Err("Invalid output format".into()),
    };

    let defaults = KineticParameters::default();
    let config = PcrConfig {
        parameters: KineticParameters {
            cycles: matches
                .get_one::<usize>("cycles")
                .copied()
                .unwrap_or(defaults.cycles),
            annealing_sec: matches
                .get_one::<f64>("annealing")
                .copied()
                .unwrap_or(defaults.annealing_sec),
            length: matches
                .get_one::<usize>("length")
                .copied()
                .unwrap_or(defaults.length),
            gc_fraction: matches
                .get_one::<f64>("gc")
                .copied()
                .unwrap_or(defaults.gc_fraction),
            units: matches
                .get_one::<f64>("units")
                .copied()
                .unwrap_or(defaults.units),
            nucleotide_molarity: matches
                .get_one::<f64>("nucleotides")
                .copied()
                .unwrap_or(defaults.nucleotide_molarity),
        },
        reaction: ReactionSetup {
            template_ng: matches
                .get_one::<f64>("template-ng")
                .copied()
                .unwrap_or(DEFAULT_TEMPLATE_NG),
            reaction_volume_ul: matches
                .get_one::<f64>("volume")
                .copied()
                .unwrap_or(DEFAULT_REACTION_VOLUME_UL),
        },
        output_format,
        quiet,
        num_threads: matches.get_one::<usize>("threads").copied(),
    };

    let analyzer = PcrAnalyzer::with_config(config)?;
    let start = match (
        matches.get_one::<f64>("concentration"),
        matches.get_one::<String>("template"),
    ) {
        (Some(&molar), _) => StartingMaterial::Molar(molar),
        (None, Some(template)) => StartingMaterial::Template(template.as_str()),
        (None, None) => return Err("Either --concentration or --template is required".into()),
    };
    let product = matches.get_one::<String>("product").map(String::as_str);

    let results = analyzer.analyze(start, product)?;

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_results(&mut writer, &results, analyzer.config.output_format)?;
    writer.flush()?;

    if let Some(cycle) = results.trajectory.plateau_cycle() {
        log::info!("Nucleotides ran out at cycle {}", cycle);
    }
    log::info!(
        "Simulation complete! {} cycles, final yield {:.4} ng/ul.",
        results.trajectory.cycles(),
        results.product_yield.ng_per_ul
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_start_is_required() {
        let result = build_cli().try_get_matches_from(["pcrsim"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_product_conflicts_with_length() {
        let result =
            build_cli().try_get_matches_from(["pcrsim", "-c", "1e-12", "-p", "ACGT", "-l", "500"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_cycles_rejected() {
        let result = build_cli().try_get_matches_from(["pcrsim", "-c", "1e-12", "-n", "-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_parse() {
        let matches = build_cli()
            .try_get_matches_from(["pcrsim", "-c", "1e-12"])
            .unwrap();
        assert_eq!(matches.get_one::<usize>("cycles"), Some(&35));
        assert_eq!(matches.get_one::<f64>("annealing"), Some(&30.0));
        assert_eq!(matches.get_one::<f64>("nucleotides"), Some(&0.0002));
        assert_eq!(matches.get_one::<f64>("concentration"), Some(&1.0e-12));
        assert!(!matches.get_flag("quiet"));
    }
}
