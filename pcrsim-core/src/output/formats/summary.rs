use std::io::Write;

use crate::{constants::VERSION, results::PcrResults, sequence::SequenceProfile, types::PcrError};

/// Write a human-readable summary of the run and its yield
pub fn write_summary_format<W: Write>(
    writer: &mut W,
    results: &PcrResults,
) -> Result<(), PcrError> {
    let parameters = &results.parameters;
    let trajectory = &results.trajectory;

    writeln!(writer, "# pcrsim v{}", VERSION)?;
    if let Some(template) = &results.template {
        write_profile(writer, "Template", template)?;
    }
    if let Some(product) = &results.product {
        write_profile(writer, "Product", product)?;
    }

    writeln!(writer, "Cycles:                {}", parameters.cycles)?;
    writeln!(writer, "Annealing (s):         {}", parameters.annealing_sec)?;
    writeln!(writer, "Product length (bp):   {}", parameters.length)?;
    writeln!(
        writer,
        "Product GC (%):        {:.2}",
        parameters.gc_fraction * 100.0
    )?;
    writeln!(writer, "Polymerase (U):        {}", parameters.units)?;
    writeln!(
        writer,
        "Nucleotides (mol):     {:.4e}",
        parameters.nucleotide_molarity
    )?;
    writeln!(
        writer,
        "Starting amount (M):   {:.4e}",
        trajectory.initial_concentration()
    )?;
    writeln!(
        writer,
        "Final amount (M):      {:.4e}",
        results.product_yield.molar
    )?;
    match trajectory.plateau_cycle() {
        Some(cycle) => writeln!(writer, "Plateau from cycle:    {}", cycle)?,
        None => writeln!(writer, "Plateau from cycle:    none")?,
    }
    writeln!(
        writer,
        "Product mass (g):      {:.4e}",
        results.product_yield.mass_g
    )?;
    writeln!(
        writer,
        "Simulated resulting PCR concentration: {:.4} ng/ul",
        results.product_yield.ng_per_ul
    )?;
    Ok(())
}

fn write_profile<W: Write>(
    writer: &mut W,
    label: &str,
    profile: &SequenceProfile,
) -> Result<(), PcrError> {
    writeln!(
        writer,
        "{:<22} {} bp, {:.2}% GC, {:.1} g/mol",
        format!("{label}:"),
        profile.length,
        profile.gc_fraction * 100.0,
        profile.molar_mass
    )?;
    Ok(())
}
