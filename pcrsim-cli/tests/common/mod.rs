#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Template shared by the sequence-driven tests
pub const TEMPLATE: &str = "ATGAAACGTCGTCGTCGTCGTAAATAGGCCATTGACCAGT";

/// Product shared by the sequence-driven tests
pub const PRODUCT: &str = "GATTACAGGCCATTGACCAGT";

/// Runs the pcrsim CLI with given arguments and returns its stdout
pub fn run_pcrsim(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pcrsim")?;
    cmd.args(args).env("RUST_LOG", "off");

    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Runs the pcrsim CLI expecting failure and returns its stderr
pub fn run_pcrsim_failing(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pcrsim")?;
    cmd.args(args).env("RUST_LOG", "off");

    let output = cmd.assert().failure().get_output().stderr.clone();
    Ok(String::from_utf8(output)?)
}

/// Runs the pcrsim CLI under a `RUST_LOG` filter and returns its stderr
pub fn run_pcrsim_logged(
    args: &[&str],
    filter: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pcrsim")?;
    cmd.args(args).env("RUST_LOG", filter);

    let output = cmd.assert().success().get_output().stderr.clone();
    Ok(String::from_utf8(output)?)
}

/// Writes a single-record FASTA file
pub fn write_fasta(id: &str, sequence: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ">{}", id).unwrap();
    for line in sequence.as_bytes().chunks(60) {
        file.write_all(line).unwrap();
        file.write_all(b"\n").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Parses TSV output into `(cycle, concentration, regime)` rows
pub fn parse_tsv(output: &str) -> Vec<(usize, f64, String)> {
    output
        .lines()
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            (
                fields[0].parse().unwrap(),
                fields[1].parse().unwrap(),
                fields[2].to_string(),
            )
        })
        .collect()
}
