pub mod atoms;
pub mod bonds;
pub mod convert;
pub mod info;
pub mod summary;

use anyhow::{anyhow, Context};
use ens_core::Molecule;
use std::path::Path;

/// Read `input` and take the molecule at `index`.
pub(crate) fn load_molecule(input: &Path, index: usize) -> anyhow::Result<Molecule> {
    let mut molecules = load_all(input)?;
    let count = molecules.len();
    if index >= count {
        return Err(anyhow!(
            "{} holds {count} molecule(s), no molecule at index {index}",
            input.display()
        ));
    }
    Ok(molecules.swap_remove(index))
}

pub(crate) fn load_all(input: &Path) -> anyhow::Result<Vec<Molecule>> {
    ens_io::read_path(input).with_context(|| format!("failed to read {}", input.display()))
}
