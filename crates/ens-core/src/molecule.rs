use crate::bonds::{group_by_origin, Bond, BondKind, BondOrder, BondTable};
use crate::element::assign_element;
use crate::error::{Error, Result};
use crate::info::{parse_kind, InfoKind, InfoValue, MoleculeInfo};
use crate::selection::{AtomSelector, AtomView, Selection};
use crate::substructure::{Substructure, SubstructureIter};
use itertools::{izip, Itertools};
use pdbtbx::Element;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// One line of the `@<TRIPOS>ATOM` record, before it is stored column-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub id: u32,
    pub name: String,
    pub coords: [f32; 3],
    pub atom_type: String,
    pub subst_id: Option<u32>,
    pub subst_name: Option<String>,
    pub charge: Option<f32>,
    pub status_bits: Option<String>,
}

/// Atom columns that can be requested per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AtomField {
    AtomName,
    Coords,
    AtomType,
    SubsetId,
    SubsetName,
    Charge,
}

impl AtomField {
    pub fn parse(kind: &str) -> Result<Self> {
        parse_kind(kind)
    }
}

/// The value of one [`AtomField`] for one atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AtomValue<'a> {
    Text(&'a str),
    Coords([f32; 3]),
    Id(u32),
    Charge(f32),
    Missing,
}

impl fmt::Display for AtomValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomValue::Text(text) => f.write_str(text),
            AtomValue::Coords([x, y, z]) => write!(f, "{x:.4} {y:.4} {z:.4}"),
            AtomValue::Id(id) => write!(f, "{id}"),
            AtomValue::Charge(charge) => write!(f, "{charge:.4}"),
            AtomValue::Missing => f.write_str("-"),
        }
    }
}

/// Molecule
///
/// A MOL2 molecule stored column-wise: every per-atom vector has one entry
/// per atom, in file order. Atoms are addressed by row index; the ids written
/// in the file are kept in `ids` and mapped back with [`Molecule::atom_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    info: MoleculeInfo,
    size: usize,
    ids: Vec<u32>,
    atom_names: Vec<String>,
    coords: Vec<[f32; 3]>,
    atom_types: Vec<String>,
    elements: Vec<Option<Element>>,
    subst_ids: Vec<Option<u32>>,
    subst_names: Vec<Option<String>>,
    charges: Vec<Option<f32>>,
    status_bits: Vec<Option<String>>,
    bonds: Vec<Bond>,
    substructures: Vec<Substructure>,
    index: HashMap<u32, usize>,
}

impl Molecule {
    /// Build a molecule, checking that atom ids are unique and that every bond
    /// and substructure root points at an existing atom.
    ///
    /// The header counts are brought in line with the records: a mismatch is
    /// logged and the records win.
    pub fn from_records(
        mut info: MoleculeInfo,
        atoms: Vec<AtomRecord>,
        bonds: Vec<Bond>,
        substructures: Vec<Substructure>,
    ) -> Result<Self> {
        let size = atoms.len();
        let mut index = HashMap::with_capacity(size);
        for (row, atom) in atoms.iter().enumerate() {
            if index.insert(atom.id, row).is_some() {
                return Err(Error::DuplicateAtom(atom.id));
            }
        }
        for bond in &bonds {
            for atom in [bond.origin, bond.target] {
                if !index.contains_key(&atom) {
                    return Err(Error::UnknownAtom {
                        owner: format!("Bond {}", bond.id),
                        atom,
                    });
                }
            }
        }
        for subst in &substructures {
            if !index.contains_key(&subst.root_atom) {
                return Err(Error::UnknownAtom {
                    owner: format!("Substructure {}", subst.name),
                    atom: subst.root_atom,
                });
            }
        }

        if info.counts.atoms != size {
            tracing::warn!(
                molecule = %info.name,
                header = info.counts.atoms,
                parsed = size,
                "atom count in header does not match ATOM record"
            );
            info.counts.atoms = size;
        }
        match info.counts.bonds {
            Some(n) if n != bonds.len() => {
                tracing::warn!(
                    molecule = %info.name,
                    header = n,
                    parsed = bonds.len(),
                    "bond count in header does not match BOND record"
                );
                info.counts.bonds = Some(bonds.len());
            }
            None if !bonds.is_empty() => info.counts.bonds = Some(bonds.len()),
            _ => {}
        }

        let (ids, atom_names, coords, atom_types, elements, subst_ids, subst_names, charges, status_bits): (
            Vec<u32>,
            Vec<String>,
            Vec<[f32; 3]>,
            Vec<String>,
            Vec<Option<Element>>,
            Vec<Option<u32>>,
            Vec<Option<String>>,
            Vec<Option<f32>>,
            Vec<Option<String>>,
        ) = atoms
            .into_iter()
            .map(|atom| {
                let element = assign_element(&atom.atom_type, &atom.name);
                if element.is_none() {
                    tracing::debug!(
                        atom = atom.id,
                        atom_type = %atom.atom_type,
                        "no element for atom"
                    );
                }
                (
                    atom.id,
                    atom.name,
                    atom.coords,
                    atom.atom_type,
                    element,
                    atom.subst_id,
                    atom.subst_name,
                    atom.charge,
                    atom.status_bits,
                )
            })
            .multiunzip();

        Ok(Molecule {
            info,
            size,
            ids,
            atom_names,
            coords,
            atom_types,
            elements,
            subst_ids,
            subst_names,
            charges,
            status_bits,
            bonds,
            substructures,
            index,
        })
    }

    pub fn info(&self) -> &MoleculeInfo {
        &self.info
    }
    pub fn name(&self) -> &str {
        &self.info.name
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    /// Row index of the atom with file id `id`.
    pub fn atom_index(&self, id: u32) -> Option<usize> {
        self.index.get(&id).copied()
    }
    pub fn get_id(&self, idx: usize) -> u32 {
        self.ids[idx]
    }
    pub fn get_ids(&self) -> &[u32] {
        &self.ids
    }
    pub fn get_atom_name(&self, idx: usize) -> &str {
        &self.atom_names[idx]
    }
    pub fn get_coord(&self, idx: usize) -> &[f32; 3] {
        &self.coords[idx]
    }
    pub fn get_coords(&self) -> &[[f32; 3]] {
        &self.coords
    }
    pub fn get_atom_type(&self, idx: usize) -> &str {
        &self.atom_types[idx]
    }
    pub fn get_element(&self, idx: usize) -> Option<&Element> {
        self.elements[idx].as_ref()
    }
    pub fn get_elements(&self) -> &[Option<Element>] {
        &self.elements
    }
    pub fn get_subst_id(&self, idx: usize) -> Option<u32> {
        self.subst_ids[idx]
    }
    pub fn get_subst_name(&self, idx: usize) -> Option<&str> {
        self.subst_names[idx].as_deref()
    }
    pub fn get_charge(&self, idx: usize) -> Option<f32> {
        self.charges[idx]
    }
    pub fn get_status_bits(&self, idx: usize) -> Option<&str> {
        self.status_bits[idx].as_deref()
    }
    pub fn get_bonds(&self) -> &[Bond] {
        &self.bonds
    }
    pub fn get_substructures(&self) -> &[Substructure] {
        &self.substructures
    }

    /// Header lookup, see [`MoleculeInfo::information`].
    pub fn information(&self, kind: InfoKind) -> InfoValue<'_> {
        self.info.information(kind)
    }

    /// Element symbol of an atom. Atoms without an element report their SYBYL
    /// type prefix instead.
    pub fn element_symbol(&self, idx: usize) -> Cow<'_, str> {
        match &self.elements[idx] {
            Some(element) => Cow::Owned(element.to_string()),
            None => Cow::Borrowed(
                self.atom_types[idx]
                    .split('.')
                    .next()
                    .unwrap_or_default(),
            ),
        }
    }

    /// An atom with a known element other than hydrogen. Lone pairs and
    /// dummies without an element are not heavy atoms.
    pub fn is_heavy_atom(&self, idx: usize) -> bool {
        matches!(self.elements[idx], Some(element) if element != Element::H)
    }

    /// Element symbol -> atom ids, in file order.
    pub fn element_groups(&self) -> BTreeMap<String, Vec<u32>> {
        let mut groups: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for idx in 0..self.size {
            groups
                .entry(self.element_symbol(idx).into_owned())
                .or_default()
                .push(self.ids[idx]);
        }
        groups
    }

    /// Value of one column for one atom.
    pub fn atom_value(&self, idx: usize, field: AtomField) -> AtomValue<'_> {
        match field {
            AtomField::AtomName => AtomValue::Text(&self.atom_names[idx]),
            AtomField::Coords => AtomValue::Coords(self.coords[idx]),
            AtomField::AtomType => AtomValue::Text(&self.atom_types[idx]),
            AtomField::SubsetId => self.subst_ids[idx].map_or(AtomValue::Missing, AtomValue::Id),
            AtomField::SubsetName => self.subst_names[idx]
                .as_deref()
                .map_or(AtomValue::Missing, AtomValue::Text),
            AtomField::Charge => self.charges[idx].map_or(AtomValue::Missing, AtomValue::Charge),
        }
    }

    /// One column for all atoms of an element, in file order. The symbol is
    /// matched case-insensitively; an element that is not present gives an
    /// empty list.
    pub fn atoms_of(&self, symbol: &str, field: AtomField) -> Vec<AtomValue<'_>> {
        self.select_by_element(symbol)
            .indices()
            .iter()
            .map(|&idx| self.atom_value(idx, field))
            .collect()
    }

    /// Geometric center of all atoms. The origin for an empty molecule.
    pub fn centroid(&self) -> [f32; 3] {
        centroid_of(self.coords.iter())
    }

    pub fn heavy_atom_count(&self) -> usize {
        (0..self.size).filter(|&idx| self.is_heavy_atom(idx)).count()
    }

    /// Sum of the partial charges that are present.
    pub fn net_charge(&self) -> f32 {
        self.charges.iter().flatten().sum()
    }

    /// Origin atom id -> bonded atom ids.
    pub fn bonded_atoms(&self) -> BTreeMap<u32, Vec<u32>> {
        group_by_origin(&self.bonds, |b| b.target)
    }

    /// Origin atom id -> bond types.
    pub fn bond_orders(&self) -> BTreeMap<u32, Vec<BondOrder>> {
        group_by_origin(&self.bonds, |b| b.order)
    }

    pub fn bond_table(&self, kind: BondKind) -> BondTable {
        BondTable::from_bonds(&self.bonds, kind)
    }

    /// Ids of all atoms bonded to `atom_id`, whichever end of the bond it is on.
    pub fn neighbors(&self, atom_id: u32) -> Result<Vec<u32>> {
        if !self.index.contains_key(&atom_id) {
            return Err(Error::UnknownAtom {
                owner: format!("Molecule {}", self.info.name),
                atom: atom_id,
            });
        }
        Ok(self
            .bonds
            .iter()
            .filter_map(|bond| bond.partner(atom_id))
            .collect())
    }

    /// Row indices where a new substructure run starts: whenever the
    /// substructure id or name changes from one atom to the next.
    pub(crate) fn get_substructure_starts(&self) -> Vec<usize> {
        if self.size == 0 {
            return Vec::new();
        }
        let mut starts = vec![0];
        starts.extend(
            izip!(&self.subst_ids, &self.subst_names)
                .tuple_windows()
                .enumerate()
                .filter_map(|(i, ((id1, name1), (id2, name2)))| {
                    (id1 != id2 || name1 != name2).then_some(i + 1)
                }),
        );
        starts
    }

    pub fn iter_substructures(&self) -> SubstructureIter<'_> {
        SubstructureIter::new(self, self.get_substructure_starts())
    }

    pub fn select(&self) -> AtomSelector<'_> {
        AtomSelector::new(self)
    }

    pub fn select_by_element(&self, symbol: &str) -> Selection {
        self.select_where(|idx| self.element_symbol(idx).eq_ignore_ascii_case(symbol.trim()))
    }

    pub fn select_by_atom_type(&self, atom_type: &str) -> Selection {
        self.select_where(|idx| self.atom_types[idx] == atom_type)
    }

    pub fn select_by_substructure(&self, subst_name: &str) -> Selection {
        self.select_where(|idx| self.subst_names[idx].as_deref() == Some(subst_name))
    }

    pub(crate) fn select_where<F>(&self, predicate: F) -> Selection
    where
        F: Fn(usize) -> bool,
    {
        Selection::new((0..self.size).filter(|&idx| predicate(idx)).collect())
    }

    pub fn view(&self, selection: Selection) -> AtomView<'_> {
        AtomView::new(self, selection)
    }
}

pub(crate) fn centroid_of<'a>(coords: impl Iterator<Item = &'a [f32; 3]>) -> [f32; 3] {
    let (sum, n) = coords.fold(([0.0f32; 3], 0usize), |(mut acc, n), c| {
        acc[0] += c[0];
        acc[1] += c[1];
        acc[2] += c[2];
        (acc, n + 1)
    });
    if n == 0 {
        return [0.0; 3];
    }
    let n = n as f32;
    [sum[0] / n, sum[1] / n, sum[2] / n]
}
