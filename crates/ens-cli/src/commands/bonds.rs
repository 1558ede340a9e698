use super::load_molecule;
use crate::cli::Format;
use ens_core::BondKind;
use std::path::Path;

pub fn execute(input: &Path, index: usize, kind: &str, format: Format) -> anyhow::Result<()> {
    let kind = BondKind::parse(kind)?;
    let molecule = load_molecule(input, index)?;
    let table = molecule.bond_table(kind);

    match format {
        Format::Text => print!("{table}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}
