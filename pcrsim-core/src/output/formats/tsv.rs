use std::io::Write;

use crate::{results::PcrResults, types::PcrError};

/// Label written for the starting concentration row
const INITIAL_LABEL: &str = "initial";

/// Write the trajectory as tab-separated `cycle`, `concentration_molar`, `regime`
pub fn write_tsv_format<W: Write>(writer: &mut W, results: &PcrResults) -> Result<(), PcrError> {
    let trajectory = &results.trajectory;

    writeln!(writer, "cycle\tconcentration_molar\tregime")?;
    writeln!(
        writer,
        "0\t{:.6e}\t{}",
        trajectory.initial_concentration(),
        INITIAL_LABEL
    )?;
    for record in trajectory.records() {
        writeln!(
            writer,
            "{}\t{:.6e}\t{}",
            record.cycle,
            record.concentration,
            record.regime()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        PcrAnalyzer, StartingMaterial,
        config::{KineticParameters, PcrConfig},
    };
    use insta::assert_snapshot;

    fn results_for(cycles: usize, nucleotide_molarity: f64) -> PcrResults {
        PcrAnalyzer::new(PcrConfig {
            parameters: KineticParameters {
                cycles,
                nucleotide_molarity,
                ..Default::default()
            },
            quiet: true,
            ..Default::default()
        })
        .analyze(StartingMaterial::Molar(1.0e-9), None)
        .unwrap()
    }

    fn render(results: &PcrResults) -> String {
        let mut buffer = Vec::new();
        write_tsv_format(&mut buffer, results).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_tsv_enzyme_limited_rows() {
        let output = render(&results_for(2, 0.0002));
        assert_snapshot!(output, @r"
        cycle	concentration_molar	regime
        0	1.000000e-9	initial
        1	1.000083e-9	enzyme-limited
        2	1.000167e-9	enzyme-limited
        ");
    }

    #[test]
    fn test_tsv_row_per_trajectory_entry() {
        let output = render(&results_for(35, 0.0002));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 37);
        assert_eq!(lines[1].split('\t').count(), 3);
        assert!(lines[36].starts_with("35\t"));
    }

    #[test]
    fn test_tsv_marks_exhausted_cycles() {
        let output = render(&results_for(3, 0.0));
        for line in output.lines().skip(2) {
            assert!(line.ends_with("\tsubstrate-exhausted"), "{line}");
            assert!(line.contains("\t1.000000e-9\t"));
        }
    }
}
