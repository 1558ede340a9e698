use crate::{AtomRecord, Bond, BondOrder, Counts, Molecule, MoleculeInfo, MoleculeType, Substructure};

pub(crate) fn atom(id: u32, name: &str, atom_type: &str, coords: [f32; 3]) -> AtomRecord {
    AtomRecord {
        id,
        name: name.to_string(),
        coords,
        atom_type: atom_type.to_string(),
        subst_id: None,
        subst_name: None,
        charge: None,
        status_bits: None,
    }
}

fn in_subst(mut record: AtomRecord, subst_id: u32, subst_name: &str, charge: f32) -> AtomRecord {
    record.subst_id = Some(subst_id);
    record.subst_name = Some(subst_name.to_string());
    record.charge = Some(charge);
    record
}

fn bonds(table: &[(u32, u32, BondOrder)]) -> Vec<Bond> {
    table
        .iter()
        .enumerate()
        .map(|(i, &(origin, target, order))| Bond::new(i as u32 + 1, origin, target, order))
        .collect()
}

/// Chloroacetamide, same content as the `chloroacetamide.mol2` fixture.
pub(crate) fn get_ligand() -> Molecule {
    let info = MoleculeInfo::new("chloroacetamide", "9 8 1 0 0".parse::<Counts>().unwrap());
    let atoms = [
        (1, "C1", "C.3", [0.0, 0.0, 0.0], 0.05),
        (2, "C2", "C.2", [1.52, 0.0, 0.0], 0.55),
        (3, "O1", "O.2", [2.14, 1.06, 0.0], -0.55),
        (4, "N1", "N.am", [2.16, -1.18, 0.0], -0.8),
        (5, "CL1", "Cl", [-0.6, 1.66, 0.0], -0.1),
        (6, "H1", "H", [-0.36, -0.52, 0.89], 0.05),
        (7, "H2", "H", [-0.36, -0.52, -0.89], 0.05),
        (8, "H3", "H", [3.17, -1.2, 0.0], 0.375),
        (9, "H4", "H", [1.63, -2.04, 0.0], 0.375),
    ]
    .into_iter()
    .map(|(id, name, ty, xyz, q)| in_subst(atom(id, name, ty, xyz), 1, "LIG1", q))
    .collect();
    let bonds = bonds(&[
        (1, 2, BondOrder::Single),
        (2, 3, BondOrder::Double),
        (2, 4, BondOrder::Amide),
        (1, 5, BondOrder::Single),
        (1, 6, BondOrder::Single),
        (1, 7, BondOrder::Single),
        (4, 8, BondOrder::Single),
        (4, 9, BondOrder::Single),
    ]);
    Molecule::from_records(info, atoms, bonds, vec![]).unwrap()
}

/// Gly-Gly heavy atoms split over two residue substructures.
pub(crate) fn get_dipeptide() -> Molecule {
    let mut info = MoleculeInfo::new("GLY-GLY", "9 8 2 0 0".parse::<Counts>().unwrap());
    info.mol_type = Some(MoleculeType::Protein);
    let atoms = [
        (1, "N", "N.3", [0.0, 0.0, 0.0], 1, "GLY1"),
        (2, "CA", "C.3", [1.458, 0.0, 0.0], 1, "GLY1"),
        (3, "C", "C.2", [2.009, 1.42, 0.0], 1, "GLY1"),
        (4, "O", "O.2", [1.251, 2.39, 0.0], 1, "GLY1"),
        (5, "N", "N.am", [3.332, 1.536, 0.0], 2, "GLY2"),
        (6, "CA", "C.3", [3.988, 2.839, 0.0], 2, "GLY2"),
        (7, "C", "C.2", [5.504, 2.693, 0.0], 2, "GLY2"),
        (8, "O", "O.co2", [6.044, 1.587, 0.0], 2, "GLY2"),
        (9, "OXT", "O.co2", [6.16, 3.751, 0.0], 2, "GLY2"),
    ]
    .into_iter()
    .map(|(id, name, ty, xyz, sid, sname)| in_subst(atom(id, name, ty, xyz), sid, sname, 0.0))
    .collect();
    let bonds = bonds(&[
        (1, 2, BondOrder::Single),
        (2, 3, BondOrder::Single),
        (3, 4, BondOrder::Double),
        (3, 5, BondOrder::Amide),
        (5, 6, BondOrder::Single),
        (6, 7, BondOrder::Single),
        (7, 8, BondOrder::Aromatic),
        (7, 9, BondOrder::Aromatic),
    ]);
    let mut gly1 = Substructure::new(1, "GLY1", 1);
    gly1.chain = Some("A".to_string());
    let mut gly2 = Substructure::new(2, "GLY2", 5);
    gly2.chain = Some("A".to_string());
    Molecule::from_records(info, atoms, bonds, vec![gly1, gly2]).unwrap()
}

pub(crate) fn get_empty() -> Molecule {
    Molecule::from_records(
        MoleculeInfo::new("empty", Counts::default()),
        vec![],
        vec![],
        vec![],
    )
    .unwrap()
}
