//! Error types for ens-core

use thiserror::Error;

/// Result type alias for ens-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a [`Molecule`](crate::Molecule)
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A query kind that is not one of the accepted names
    #[error("Wrong kind `{kind}`, expected one of: {expected}")]
    UnknownKind { kind: String, expected: String },

    /// Two atoms share the same id
    #[error("Duplicate atom id {0}")]
    DuplicateAtom(u32),

    /// A bond or substructure points at an atom id that does not exist
    #[error("{owner} references unknown atom {atom}")]
    UnknownAtom { owner: String, atom: u32 },

    /// Bond type column that is not a SYBYL bond type
    #[error("Invalid bond type `{0}`")]
    InvalidBondOrder(String),

    /// A header or record field that could not be parsed
    #[error("Invalid {field} value `{value}`")]
    InvalidField { field: &'static str, value: String },
}
