//! ens-io
//!
//! Reading and writing Tripos MOL2 files, the format PDBbind and CASF-2016
//! distribute their ligands in, and exporting atom tables for downstream
//! feature generation.
//!
//! ```ignore
//! let molecules = ens_io::read_path("1a30_ligand.mol2")?;
//! let ligand = &molecules[0];
//! println!("{}", ligand.information(ens_core::InfoKind::Name));
//! ```
mod error;
pub mod mol2;
pub mod table;

pub use error::{Error, Result};
pub use mol2::{read_path, read_str, write_path, Reader, Writer};
pub use table::{atom_table, write_atom_csv};
