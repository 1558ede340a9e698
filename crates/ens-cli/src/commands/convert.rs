use super::load_molecule;
use anyhow::{bail, Context};
use std::path::Path;

pub fn execute(input: &Path, index: usize, output: &Path) -> anyhow::Result<()> {
    let extension = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let molecule = load_molecule(input, index)?;

    let written = match extension.as_deref() {
        Some("csv") => ens_io::write_atom_csv(&molecule, output),
        Some("mol2") => ens_io::write_path(output, [&molecule]),
        _ => bail!(
            "cannot tell the output format of {}, use a .csv or .mol2 extension",
            output.display()
        ),
    };
    written.with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(input = %input.display(), output = %output.display(), "converted");
    Ok(())
}
