//! Tripos MOL2 format.
mod reader;
mod record;
mod writer;

pub use reader::{Molecules, Reader};
pub use writer::Writer;

use crate::error::Result;
use ens_core::Molecule;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read every molecule in a MOL2 file.
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<Molecule>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let molecules = Reader::new(BufReader::new(file))
        .molecules()
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(path = %path.display(), molecules = molecules.len(), "read mol2 file");
    Ok(molecules)
}

/// Read every molecule in MOL2 text.
pub fn read_str(text: &str) -> Result<Vec<Molecule>> {
    Reader::new(text.as_bytes()).molecules().collect()
}

/// Write molecules to a MOL2 file, replacing it if it exists.
pub fn write_path<'a>(
    path: impl AsRef<Path>,
    molecules: impl IntoIterator<Item = &'a Molecule>,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Writer::new(BufWriter::new(File::create(path)?));
    let mut count = 0;
    for molecule in molecules {
        writer.write_molecule(molecule)?;
        count += 1;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), molecules = count, "wrote mol2 file");
    Ok(())
}
