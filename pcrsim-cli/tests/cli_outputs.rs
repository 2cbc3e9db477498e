mod common;

use assert_cmd::Command;
use std::fs;
use tempfile::NamedTempFile;

use crate::common::{parse_tsv, run_pcrsim, run_pcrsim_failing};

#[test]
fn cli_help_lists_kinetic_options() {
    let mut cmd = Command::cargo_bin("pcrsim").unwrap();
    cmd.arg("--help");
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    for option in [
        "--concentration",
        "--template",
        "--product",
        "--cycles",
        "--annealing",
        "--units",
        "--nucleotides",
        "--format",
    ] {
        assert!(text.contains(option), "missing {option} in help");
    }
}

#[test]
fn default_scenario_tsv_has_one_row_per_cycle() {
    let output = run_pcrsim(&["-c", "1e-9", "-f", "tsv"]).unwrap();
    assert!(output.starts_with("cycle\tconcentration_molar\tregime\n"));

    let rows = parse_tsv(&output);
    assert_eq!(rows.len(), 36);
    assert_eq!(rows[0], (0, 1.0e-9, "initial".to_string()));
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.0, index);
    }
    for window in rows.windows(2) {
        assert!(window[1].1 > window[0].1);
        assert_eq!(window[1].2, "enzyme-limited");
    }
}

#[test]
fn zero_cycles_prints_initial_row_only() {
    let output = run_pcrsim(&["-c", "2.5e-12", "-n", "0", "-f", "tsv"]).unwrap();
    let rows = parse_tsv(&output);
    assert_eq!(rows, vec![(0, 2.5e-12, "initial".to_string())]);
}

#[test]
fn exhausted_nucleotides_plateau() {
    let output = run_pcrsim(&["-c", "1e-12", "--nucleotides", "0", "-f", "tsv"]).unwrap();
    let rows = parse_tsv(&output);
    assert!(rows[1..].iter().all(|row| row.2 == "substrate-exhausted"));
    assert!(rows.iter().all(|row| row.1 == 1.0e-12));
}

#[test]
fn summary_reports_concentration() {
    let output = run_pcrsim(&["-c", "1e-9", "-q"]).unwrap();
    assert!(output.starts_with("# pcrsim v"));
    assert!(output.contains("Cycles:                35\n"));
    assert!(output.contains("Simulated resulting PCR concentration: "));
}

#[test]
fn output_file_receives_results() {
    let out_tmp = NamedTempFile::new().unwrap();
    let stdout = run_pcrsim(&[
        "-c",
        "1e-12",
        "-f",
        "tsv",
        "-o",
        out_tmp.path().to_str().unwrap(),
    ])
    .unwrap();
    assert!(stdout.is_empty());

    let written = fs::read_to_string(out_tmp.path()).unwrap();
    assert_eq!(parse_tsv(&written).len(), 36);
}

#[test]
fn zero_concentration_is_invalid_input() {
    let stderr = run_pcrsim_failing(&["-c", "0"]).unwrap();
    assert!(stderr.contains("InvalidInput"), "{stderr}");
}

#[test]
fn gc_fraction_above_one_is_invalid_input() {
    let stderr = run_pcrsim_failing(&["-c", "1e-12", "-g", "1.5"]).unwrap();
    assert!(stderr.contains("InvalidInput"), "{stderr}");
    assert!(stderr.contains("gc fraction"), "{stderr}");
}

#[test]
fn unknown_format_is_rejected() {
    let stderr = run_pcrsim_failing(&["-c", "1e-12", "-f", "png"]).unwrap();
    assert!(stderr.contains("Invalid output format"), "{stderr}");
}

#[test]
fn missing_start_is_rejected() {
    let stderr = run_pcrsim_failing(&["-n", "10"]).unwrap();
    assert!(stderr.contains("--concentration"), "{stderr}");
}
