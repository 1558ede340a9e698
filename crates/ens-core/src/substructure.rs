//! Substructures and per-substructure atom access.
//!
//! A MOL2 substructure groups atoms into a residue, a ligand or a fragment.
//! The `@<TRIPOS>SUBSTRUCTURE` record describes each group; the atoms point at
//! their group through the `subst_id` column. [`SubstructureIter`] walks the
//! atoms one contiguous run of `subst_id` at a time, the way residues are
//! walked in a protein structure.
//!
use crate::molecule::Molecule;
use crate::selection::{AtomView, Selection};
use pdbtbx::Element;
use serde::Serialize;

/// One line of the `@<TRIPOS>SUBSTRUCTURE` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substructure {
    pub id: u32,
    pub name: String,
    pub root_atom: u32,
    pub subst_type: Option<String>,
    pub dict_type: Option<u32>,
    pub chain: Option<String>,
    pub sub_type: Option<String>,
    pub inter_bonds: Option<u32>,
    pub status: Option<String>,
    pub comment: Option<String>,
}

impl Substructure {
    pub fn new(id: u32, name: impl Into<String>, root_atom: u32) -> Self {
        Substructure {
            id,
            name: name.into(),
            root_atom,
            subst_type: None,
            dict_type: None,
            chain: None,
            sub_type: None,
            inter_bonds: None,
            status: None,
            comment: None,
        }
    }
}

/// Atoms of one contiguous substructure run.
pub struct SubstructureAtoms<'a> {
    pub start_idx: usize,
    pub end_idx: usize,
    pub subst_id: Option<u32>,
    pub subst_name: Option<&'a str>,
    pub parent: &'a Molecule,
}

impl<'a> SubstructureAtoms<'a> {
    /// The `@<TRIPOS>SUBSTRUCTURE` entry for this run, when the file has one.
    pub fn record(&self) -> Option<&'a Substructure> {
        let id = self.subst_id?;
        self.parent.get_substructures().iter().find(|s| s.id == id)
    }

    pub fn coords(&self) -> Vec<&[f32; 3]> {
        (self.start_idx..self.end_idx)
            .map(|i| self.parent.get_coord(i))
            .collect()
    }

    pub fn atom_names(&self) -> Vec<&str> {
        (self.start_idx..self.end_idx)
            .map(|i| self.parent.get_atom_name(i))
            .collect()
    }

    pub fn elements(&self) -> Vec<Option<&'a Element>> {
        (self.start_idx..self.end_idx)
            .map(|i| self.parent.get_element(i))
            .collect()
    }

    pub fn atom_count(&self) -> usize {
        self.end_idx - self.start_idx
    }

    pub fn view(&self) -> AtomView<'a> {
        self.parent
            .view(Selection::new((self.start_idx..self.end_idx).collect()))
    }

    /// Row index of the first atom with this name.
    pub fn find_atom_by_name(&self, name: &str) -> Option<usize> {
        (self.start_idx..self.end_idx).find(|&i| self.parent.get_atom_name(i) == name)
    }
}

pub struct SubstructureIter<'a> {
    molecule: &'a Molecule,
    starts: Vec<usize>,
    current: usize,
}

impl<'a> SubstructureIter<'a> {
    pub(crate) fn new(molecule: &'a Molecule, starts: Vec<usize>) -> Self {
        SubstructureIter {
            molecule,
            starts,
            current: 0,
        }
    }
}

impl<'a> Iterator for SubstructureIter<'a> {
    type Item = SubstructureAtoms<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start_idx = *self.starts.get(self.current)?;
        let end_idx = self
            .starts
            .get(self.current + 1)
            .copied()
            .unwrap_or_else(|| self.molecule.size());
        self.current += 1;

        Some(SubstructureAtoms {
            start_idx,
            end_idx,
            subst_id: self.molecule.get_subst_id(start_idx),
            subst_name: self.molecule.get_subst_name(start_idx),
            parent: self.molecule,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utilities::{get_dipeptide, get_ligand};

    #[test]
    fn test_iteration() {
        let mol = get_dipeptide();
        let runs: Vec<_> = mol.iter_substructures().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].subst_name, Some("GLY1"));
        assert_eq!(runs[0].atom_count(), 4);
        assert_eq!(runs[1].atom_names(), vec!["N", "CA", "C", "O", "OXT"]);
        assert_eq!(runs[1].find_atom_by_name("CA"), Some(5));
        assert_eq!(runs[1].view().size(), 5);
    }

    #[test]
    fn test_record_lookup() {
        let mol = get_dipeptide();
        let second = mol.iter_substructures().nth(1).unwrap();
        let record = second.record().unwrap();
        assert_eq!(record.root_atom, 5);
        assert_eq!(record.chain.as_deref(), Some("A"));

        let ligand = get_ligand();
        let only = ligand.iter_substructures().next().unwrap();
        assert!(only.record().is_none());
        assert_eq!(only.atom_count(), ligand.size());
    }

    #[test]
    fn test_empty_molecule() {
        let mol = crate::test_utilities::get_empty();
        assert_eq!(mol.iter_substructures().count(), 0);
    }
}
