use super::selection::Selection;
use crate::molecule::{centroid_of, AtomField, AtomValue, Molecule};
use pdbtbx::Element;

/// A read-only window onto the selected atoms of a [`Molecule`].
pub struct AtomView<'a> {
    molecule: &'a Molecule,
    selection: Selection,
}

impl<'a> AtomView<'a> {
    pub(crate) fn new(molecule: &'a Molecule, selection: Selection) -> Self {
        AtomView {
            molecule,
            selection,
        }
    }
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
    pub fn size(&self) -> usize {
        self.selection.len()
    }
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }
    pub fn ids(&self) -> Vec<u32> {
        self.selection
            .indices()
            .iter()
            .map(|&i| self.molecule.get_id(i))
            .collect()
    }
    pub fn atom_names(&self) -> Vec<&'a str> {
        self.selection
            .indices()
            .iter()
            .map(|&i| self.molecule.get_atom_name(i))
            .collect()
    }
    pub fn coords(&self) -> Vec<[f32; 3]> {
        self.selection
            .indices()
            .iter()
            .map(|&i| *self.molecule.get_coord(i))
            .collect()
    }
    pub fn values(&self, field: AtomField) -> Vec<AtomValue<'a>> {
        self.selection
            .indices()
            .iter()
            .map(|&i| self.molecule.atom_value(i, field))
            .collect()
    }
    pub fn centroid(&self) -> [f32; 3] {
        centroid_of(self.selection.indices().iter().map(|&i| self.molecule.get_coord(i)))
    }
    pub fn iter(&self) -> impl Iterator<Item = AtomRef<'a>> + '_ {
        self.selection.indices().iter().map(|&idx| AtomRef {
            index: idx,
            id: self.molecule.get_id(idx),
            name: self.molecule.get_atom_name(idx),
            coords: self.molecule.get_coord(idx),
            atom_type: self.molecule.get_atom_type(idx),
            element: self.molecule.get_element(idx),
            charge: self.molecule.get_charge(idx),
        })
    }
}

/// One atom seen through an [`AtomView`].
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRef<'a> {
    pub index: usize,
    pub id: u32,
    pub name: &'a str,
    pub coords: &'a [f32; 3],
    pub atom_type: &'a str,
    pub element: Option<&'a Element>,
    pub charge: Option<f32>,
}

#[cfg(test)]
mod tests {
    use crate::test_utilities::get_ligand;
    use crate::{AtomField, AtomValue, Element};

    #[test]
    fn test_view_iteration() {
        let mol = get_ligand();
        let view = mol.select().element("N").collect();
        let atoms: Vec<_> = view.iter().collect();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0].name, "N1");
        assert_eq!(atoms[0].element, Some(&Element::N));
        assert_eq!(atoms[0].charge, Some(-0.8));
        assert_eq!(view.values(AtomField::AtomType), vec![AtomValue::Text("N.am")]);
    }

    #[test]
    fn test_view_centroid() {
        let mol = get_ligand();
        let hydrogens = mol.select().element("H").collect();
        let c = hydrogens.centroid();
        assert!((c[2] - 0.0).abs() < 1e-6);
        assert!(mol.select().element("Xe").collect().is_empty());
    }
}
