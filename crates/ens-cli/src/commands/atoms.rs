use super::load_molecule;
use crate::cli::Format;
use ens_core::AtomField;
use std::path::Path;

pub fn execute(
    input: &Path,
    index: usize,
    element: &str,
    field: &str,
    format: Format,
) -> anyhow::Result<()> {
    let field = AtomField::parse(field)?;
    let molecule = load_molecule(input, index)?;
    let values = molecule.atoms_of(element, field);
    if values.is_empty() {
        tracing::warn!(element, molecule = molecule.name(), "no atoms of this element");
    }

    match format {
        Format::Text => {
            for value in &values {
                println!("{value}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&values)?),
    }
    Ok(())
}
