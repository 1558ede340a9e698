//! # ens-core
//!
//! In-memory model of the ligand molecules that feed the ENS-Score workflow.
//!
//! __ens-core__ provides functionality for:
//! * Holding the atoms, bonds and substructures of a Tripos MOL2 molecule
//! * Querying header information, per-element atom columns and bond tables
//! * Selecting atoms by element, SYBYL type, substructure or distance
//! * Simple descriptors: centroid, heavy atom count, net partial charge
//!
//! The main entry point is the [`Molecule`] struct. Files are read and written
//! by the `ens-io` crate.
//!
mod bonds;
mod element;
mod error;
mod info;
mod molecule;
mod selection;
mod substructure;

#[cfg(test)]
mod test_utilities;

pub use self::bonds::{Bond, BondKind, BondOrder, BondTable};
pub use self::element::assign_element;
pub use self::error::{Error, Result};
pub use self::info::{ChargeType, Counts, InfoKind, InfoValue, MoleculeInfo, MoleculeType};
pub use self::molecule::{AtomField, AtomRecord, AtomValue, Molecule};
pub use self::selection::{AtomRef, AtomSelector, AtomView, Selection};
pub use self::substructure::{Substructure, SubstructureAtoms, SubstructureIter};
pub use pdbtbx::Element;
