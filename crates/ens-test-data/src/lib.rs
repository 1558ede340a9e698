//! ens-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! The MOL2 fixtures under `data/mol2` are small hand-checked ligands in the
//! layout PDBbind ships its `*_ligand.mol2` files in.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ens_test_data::TestFile;
/// let (lig_file, _temp) = TestFile::benzene().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Benzene, 12 atoms, aromatic bonds, Gasteiger charges and one substructure.
    pub fn benzene() -> Self {
        Self {
            filebinary: include_bytes!("../data/mol2/benzene.mol2"),
            suffix: "mol2",
        }
    }
    /// Chloroacetamide with a leading comment, a blank status line,
    /// an amide bond and an unhandled `UNITY_ATOM_ATTR` record.
    pub fn chloroacetamide() -> Self {
        Self {
            filebinary: include_bytes!("../data/mol2/chloroacetamide.mol2"),
            suffix: "mol2",
        }
    }
    /// Gly-Gly dipeptide split over two residue substructures.
    pub fn glygly() -> Self {
        Self {
            filebinary: include_bytes!("../data/mol2/glygly.mol2"),
            suffix: "mol2",
        }
    }
    /// Two molecules (water, methane) in one file. Methane has no charge column.
    pub fn multi() -> Self {
        Self {
            filebinary: include_bytes!("../data/mol2/multi.mol2"),
            suffix: "mol2",
        }
    }
    /// A ChargeFW2-style ligand with six-decimal charges and coordinates.
    pub fn user_charges() -> Self {
        Self {
            filebinary: include_bytes!("../data/mol2/user_charges.mol2"),
            suffix: "mol2",
        }
    }

    /// Raw file contents, for tests that parse from memory.
    pub fn as_str(&self) -> &'static str {
        std::str::from_utf8(self.filebinary).unwrap_or_default()
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
