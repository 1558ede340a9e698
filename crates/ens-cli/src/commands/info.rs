use super::load_molecule;
use crate::cli::Format;
use ens_core::InfoKind;
use serde_json::{Map, Value};
use std::path::Path;
use strum::IntoEnumIterator;

pub fn execute(input: &Path, index: usize, kind: Option<&str>, format: Format) -> anyhow::Result<()> {
    let molecule = load_molecule(input, index)?;

    if let Some(kind) = kind {
        let value = molecule.information(InfoKind::parse(kind)?);
        match format {
            Format::Text => println!("{value}"),
            Format::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        }
        return Ok(());
    }

    match format {
        Format::Text => {
            for kind in InfoKind::iter() {
                println!("{kind}: {}", molecule.information(kind));
            }
        }
        Format::Json => {
            let mut fields = Map::new();
            for kind in InfoKind::iter() {
                fields.insert(
                    kind.to_string(),
                    serde_json::to_value(molecule.information(kind))?,
                );
            }
            println!("{}", serde_json::to_string_pretty(&Value::Object(fields))?);
        }
    }
    Ok(())
}
