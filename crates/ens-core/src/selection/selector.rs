use super::selection::Selection;
use super::view::AtomView;
use crate::molecule::Molecule;

/// Builder that narrows a selection one criterion at a time.
///
/// ```ignore
/// let aromatic_carbons = mol.select().element("C").atom_type("C.ar").collect();
/// ```
pub struct AtomSelector<'a> {
    molecule: &'a Molecule,
    current_selection: Selection,
}

impl<'a> AtomSelector<'a> {
    pub(crate) fn new(molecule: &'a Molecule) -> AtomSelector<'a> {
        AtomSelector {
            molecule,
            current_selection: Selection::new((0..molecule.size()).collect()),
        }
    }
    pub fn atom_type(mut self, atom_type: &str) -> Self {
        let type_selection = self.molecule.select_by_atom_type(atom_type);
        self.current_selection = &self.current_selection & &type_selection;
        self
    }
    pub fn collect(self) -> AtomView<'a> {
        AtomView::new(self.molecule, self.current_selection)
    }
    pub fn element(mut self, symbol: &str) -> Self {
        let element_selection = self.molecule.select_by_element(symbol);
        self.current_selection = &self.current_selection & &element_selection;
        self
    }
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let filtered = self
            .current_selection
            .indices()
            .iter()
            .copied()
            .filter(|&idx| predicate(idx))
            .collect();
        self.current_selection = Selection::new(filtered);
        self
    }
    pub fn heavy(mut self) -> Self {
        let heavy_selection = self.molecule.select_where(|idx| self.molecule.is_heavy_atom(idx));
        self.current_selection = &self.current_selection & &heavy_selection;
        self
    }
    pub fn substructure(mut self, subst_name: &str) -> Self {
        let subst_selection = self.molecule.select_by_substructure(subst_name);
        self.current_selection = &self.current_selection & &subst_selection;
        self
    }
    pub fn sphere(mut self, center: [f32; 3], radius: f32) -> Self {
        let sphere_selection = self.molecule.select_where(|idx| {
            let pos = self.molecule.get_coord(idx);
            let dx = pos[0] - center[0];
            let dy = pos[1] - center[1];
            let dz = pos[2] - center[2];
            dx * dx + dy * dy + dz * dz <= radius * radius
        });
        self.current_selection = &self.current_selection & &sphere_selection;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utilities::{get_dipeptide, get_ligand};

    #[test]
    fn test_selection_api() {
        let mol = get_dipeptide();
        let selected = mol.select().substructure("GLY2").element("O").collect();
        assert_eq!(selected.size(), 2);
        assert_eq!(selected.atom_names(), vec!["O", "OXT"]);

        let carbonyls = mol.select().atom_type("C.2").collect();
        assert_eq!(carbonyls.ids(), vec![3, 7]);
    }

    #[test]
    fn test_sphere_and_heavy() {
        let mol = get_ligand();
        let near_origin = mol.select().sphere([0.0, 0.0, 0.0], 1.2).collect();
        // C1 and its two hydrogens
        assert_eq!(near_origin.ids(), vec![1, 6, 7]);

        let heavy = mol.select().heavy().collect();
        assert_eq!(heavy.size(), 5);

        let filtered = mol.select().filter(|idx| idx % 2 == 0).collect();
        assert_eq!(filtered.ids(), vec![1, 3, 5, 7, 9]);
    }
}
