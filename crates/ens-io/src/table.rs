//! Atom tables as polars `DataFrame`s.
//!
//! One row per atom, in file order, with the element resolved. Missing
//! optional columns become nulls.
use crate::error::Result;
use ens_core::Molecule;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub fn atom_table(molecule: &Molecule) -> Result<DataFrame> {
    let n = molecule.size();
    let coords = molecule.get_coords();
    let df = df!(
        "id" => molecule.get_ids().to_vec(),
        "name" => (0..n).map(|i| molecule.get_atom_name(i)).collect::<Vec<_>>(),
        "x" => coords.iter().map(|c| c[0]).collect::<Vec<_>>(),
        "y" => coords.iter().map(|c| c[1]).collect::<Vec<_>>(),
        "z" => coords.iter().map(|c| c[2]).collect::<Vec<_>>(),
        "atom_type" => (0..n).map(|i| molecule.get_atom_type(i)).collect::<Vec<_>>(),
        "element" => (0..n).map(|i| molecule.element_symbol(i).into_owned()).collect::<Vec<_>>(),
        "subst_id" => (0..n).map(|i| molecule.get_subst_id(i)).collect::<Vec<_>>(),
        "subst_name" => (0..n).map(|i| molecule.get_subst_name(i)).collect::<Vec<_>>(),
        "charge" => (0..n).map(|i| molecule.get_charge(i)).collect::<Vec<_>>(),
    )?;
    Ok(df)
}

/// Write the atom table of `molecule` as CSV with a header row.
pub fn write_atom_csv(molecule: &Molecule, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut df = atom_table(molecule)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    tracing::info!(
        path = %path.display(),
        molecule = molecule.name(),
        rows = df.height(),
        "wrote atom table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_str;
    use ens_test_data::TestFile;

    #[test]
    fn test_atom_table() {
        let molecules = read_str(TestFile::multi().as_str()).unwrap();
        let water = atom_table(&molecules[0]).unwrap();
        assert_eq!(water.height(), 3);
        assert_eq!(water.width(), 10);
        assert_eq!(water.column("charge").unwrap().null_count(), 0);

        let methane = atom_table(&molecules[1]).unwrap();
        assert_eq!(methane.height(), 5);
        assert_eq!(methane.column("charge").unwrap().null_count(), 5);
        assert_eq!(methane.column("subst_name").unwrap().null_count(), 5);
    }

    #[test]
    fn test_write_csv() {
        let molecule = read_str(TestFile::chloroacetamide().as_str())
            .unwrap()
            .remove(0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atoms.csv");
        write_atom_csv(&molecule, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,x,y,z,atom_type,element,subst_id,subst_name,charge")
        );
        assert!(lines.any(|l| l.starts_with("5,CL1,") && l.contains(",Cl,Cl,")));
        assert_eq!(text.lines().count(), 10);
    }
}
