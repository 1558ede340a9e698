use crate::error::{Error, Result};
use crate::info::parse_kind;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Bond
///
/// One line of the `@<TRIPOS>BOND` record. `origin` and `target` are atom ids
/// as written in the file, not row indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bond {
    pub id: u32,
    pub origin: u32,
    pub target: u32,
    pub order: BondOrder,
    pub status_bits: Option<String>,
}

impl Bond {
    pub fn new(id: u32, origin: u32, target: u32, order: BondOrder) -> Self {
        Bond {
            id,
            origin,
            target,
            order,
            status_bits: None,
        }
    }
    pub fn get_atom_ids(&self) -> (u32, u32) {
        (self.origin, self.target)
    }
    /// The other end of the bond, if `atom_id` is on it.
    pub fn partner(&self, atom_id: u32) -> Option<u32> {
        if self.origin == atom_id {
            Some(self.target)
        } else if self.target == atom_id {
            Some(self.origin)
        } else {
            None
        }
    }
}

/// BondOrder:
///
/// The SYBYL bond types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum BondOrder {
    #[strum(serialize = "1")]
    #[serde(rename = "1")]
    Single,
    #[strum(serialize = "2")]
    #[serde(rename = "2")]
    Double,
    #[strum(serialize = "3")]
    #[serde(rename = "3")]
    Triple,
    #[strum(serialize = "am")]
    #[serde(rename = "am")]
    Amide,
    #[strum(serialize = "ar")]
    #[serde(rename = "ar")]
    Aromatic,
    #[strum(serialize = "du")]
    #[serde(rename = "du")]
    Dummy,
    #[strum(serialize = "un")]
    #[serde(rename = "un")]
    Unknown,
    #[strum(serialize = "nc")]
    #[serde(rename = "nc")]
    NotConnected,
}

impl BondOrder {
    pub fn parse(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidBondOrder(value.trim().to_string()))
    }
}

/// The two bond tables that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BondKind {
    /// origin atom id -> bonded atom ids
    AtomsBond,
    /// origin atom id -> bond types
    BondsType,
}

impl BondKind {
    pub fn parse(kind: &str) -> Result<Self> {
        parse_kind(kind)
    }
}

/// Bond table keyed by origin atom id, in the order bonds appear in the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BondTable {
    Atoms(BTreeMap<u32, Vec<u32>>),
    Orders(BTreeMap<u32, Vec<BondOrder>>),
}

impl BondTable {
    pub fn from_bonds(bonds: &[Bond], kind: BondKind) -> Self {
        match kind {
            BondKind::AtomsBond => BondTable::Atoms(group_by_origin(bonds, |b| b.target)),
            BondKind::BondsType => BondTable::Orders(group_by_origin(bonds, |b| b.order)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            BondTable::Atoms(table) => table.len(),
            BondTable::Orders(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn group_by_origin<T, F>(bonds: &[Bond], value: F) -> BTreeMap<u32, Vec<T>>
where
    F: Fn(&Bond) -> T,
{
    let mut table: BTreeMap<u32, Vec<T>> = BTreeMap::new();
    for bond in bonds {
        table.entry(bond.origin).or_default().push(value(bond));
    }
    table
}

impl fmt::Display for BondTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondTable::Atoms(table) => {
                for (origin, targets) in table {
                    writeln!(f, "{origin}: {}", targets.iter().join(" "))?;
                }
            }
            BondTable::Orders(table) => {
                for (origin, orders) in table {
                    writeln!(f, "{origin}: {}", orders.iter().join(" "))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonds() -> Vec<Bond> {
        vec![
            Bond::new(1, 1, 2, BondOrder::Single),
            Bond::new(2, 2, 3, BondOrder::Double),
            Bond::new(3, 2, 4, BondOrder::Amide),
            Bond::new(4, 1, 5, BondOrder::Single),
        ]
    }

    #[test]
    fn test_bond_order_parsing() {
        assert_eq!(BondOrder::parse("1").unwrap(), BondOrder::Single);
        assert_eq!(BondOrder::parse("AR").unwrap(), BondOrder::Aromatic);
        assert_eq!(BondOrder::parse(" nc ").unwrap(), BondOrder::NotConnected);
        assert_eq!(BondOrder::Amide.to_string(), "am");
        assert_eq!(
            BondOrder::parse("7").unwrap_err(),
            Error::InvalidBondOrder("7".to_string())
        );
    }

    #[test]
    fn test_bond_tables() {
        let bonds = bonds();
        match BondTable::from_bonds(&bonds, BondKind::AtomsBond) {
            BondTable::Atoms(table) => {
                assert_eq!(table[&1], vec![2, 5]);
                assert_eq!(table[&2], vec![3, 4]);
                assert!(!table.contains_key(&3));
            }
            other => panic!("unexpected table {other:?}"),
        }
        let orders = BondTable::from_bonds(&bonds, BondKind::BondsType);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders.to_string(), "1: 1 1\n2: 2 am\n");
    }

    #[test]
    fn test_partner() {
        let bond = Bond::new(1, 3, 7, BondOrder::Single);
        assert_eq!(bond.partner(3), Some(7));
        assert_eq!(bond.partner(7), Some(3));
        assert_eq!(bond.partner(1), None);
    }

    #[test]
    fn test_bond_kind_parsing() {
        assert_eq!(BondKind::parse("atoms_bond").unwrap(), BondKind::AtomsBond);
        assert!(matches!(
            BondKind::parse("bond_lengths"),
            Err(Error::UnknownKind { .. })
        ));
    }
}
