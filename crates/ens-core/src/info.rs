//! Molecule header information.
//!
//! The `@<TRIPOS>MOLECULE` record carries six positional lines: the molecule
//! name, the counts line, the molecule type, the charge type, status bits and a
//! free-text comment. Only the first two are mandatory.
use crate::error::{Error, Result};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Text shown for header fields the file did not supply.
pub const MISSING_VALUE: &str = "Missed or not mentioned Value";

/// Parse a query kind, reporting the accepted names on failure.
pub(crate) fn parse_kind<T>(kind: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + fmt::Display,
{
    kind.trim().parse::<T>().map_err(|_| Error::UnknownKind {
        kind: kind.to_string(),
        expected: T::iter().map(|k| k.to_string()).join(", "),
    })
}

/// The counts line: `num_atoms [num_bonds [num_subst [num_feat [num_sets]]]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub atoms: usize,
    pub bonds: Option<usize>,
    pub substructures: Option<usize>,
    pub features: Option<usize>,
    pub sets: Option<usize>,
}

impl Counts {
    /// The present counts in file order.
    pub fn values(&self) -> Vec<usize> {
        std::iter::once(Some(self.atoms))
            .chain([self.bonds, self.substructures, self.features, self.sets])
            .take_while(Option::is_some)
            .flatten()
            .collect()
    }
}

impl FromStr for Counts {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let invalid = || Error::InvalidField {
            field: "counts",
            value: line.trim().to_string(),
        };
        let values = line
            .split_whitespace()
            .map(|v| v.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;
        let atoms = *values.first().ok_or_else(invalid)?;
        Ok(Counts {
            atoms,
            bonds: values.get(1).copied(),
            substructures: values.get(2).copied(),
            features: values.get(3).copied(),
            sets: values.get(4).copied(),
        })
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = [
            "atoms_count",
            "bonds_count",
            "substructure_counts",
            "features_count",
            "sets_count",
        ];
        let text = labels
            .iter()
            .zip(self.values())
            .map(|(label, value)| format!("{label}={value}"))
            .join(" ");
        f.write_str(&text)
    }
}

/// Molecule type line of the header.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum MoleculeType {
    Small,
    Biopolymer,
    Protein,
    NucleicAcid,
    Saccharide,
    #[strum(default)]
    Other(String),
}

/// Charge type line of the header.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ChargeType {
    NoCharges,
    DelRe,
    Gasteiger,
    GastHuck,
    Huckel,
    Pullman,
    #[strum(serialize = "GAUSS80_CHARGES")]
    Gauss80,
    #[strum(serialize = "AMPAC_CHARGES")]
    Ampac,
    #[strum(serialize = "MULLIKEN_CHARGES")]
    Mulliken,
    #[strum(serialize = "DICT_CHARGES")]
    Dict,
    #[strum(serialize = "MMFF94_CHARGES")]
    Mmff94,
    #[strum(serialize = "USER_CHARGES")]
    User,
    #[strum(default)]
    Other(String),
}

/// Header types read anything: names outside the SYBYL list are kept as
/// written in `Other`.
macro_rules! header_type {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn as_str(&self) -> &str {
                    match self {
                        $ty::Other(other) => other,
                        known => known.as_ref(),
                    }
                }
            }

            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    let value = value.trim();
                    value
                        .parse()
                        .unwrap_or_else(|_| $ty::Other(value.to_string()))
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }
        )*
    };
}

header_type!(MoleculeType, ChargeType);

/// MoleculeInfo
///
/// The header of one molecule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoleculeInfo {
    pub name: String,
    pub counts: Counts,
    pub mol_type: Option<MoleculeType>,
    pub charge_type: Option<ChargeType>,
    pub status_bits: Option<String>,
    pub comment: Option<String>,
}

impl MoleculeInfo {
    pub fn new(name: impl Into<String>, counts: Counts) -> Self {
        MoleculeInfo {
            name: name.into(),
            counts,
            mol_type: None,
            charge_type: None,
            status_bits: None,
            comment: None,
        }
    }

    /// Look up one header field.
    pub fn information(&self, kind: InfoKind) -> InfoValue<'_> {
        match kind {
            InfoKind::Name => InfoValue::Text(&self.name),
            InfoKind::General => InfoValue::Counts(&self.counts),
            InfoKind::Type => self
                .mol_type
                .as_ref()
                .map_or(InfoValue::Missing, |t| InfoValue::Text(t.as_str())),
            InfoKind::Charge => self
                .charge_type
                .as_ref()
                .map_or(InfoValue::Missing, |c| InfoValue::Text(c.as_str())),
            InfoKind::StatusBits => self
                .status_bits
                .as_deref()
                .map_or(InfoValue::Missing, InfoValue::Text),
            InfoKind::Comment => self
                .comment
                .as_deref()
                .map_or(InfoValue::Missing, InfoValue::Text),
        }
    }
}

/// The header fields that can be queried with [`MoleculeInfo::information`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum InfoKind {
    Name,
    General,
    Type,
    Charge,
    StatusBits,
    Comment,
}

impl InfoKind {
    pub fn parse(kind: &str) -> Result<Self> {
        parse_kind(kind)
    }
}

/// Value of a header field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoValue<'a> {
    Text(&'a str),
    Counts(&'a Counts),
    Missing,
}

impl fmt::Display for InfoValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::Text(text) => f.write_str(text),
            InfoValue::Counts(counts) => fmt::Display::fmt(counts, f),
            InfoValue::Missing => f.write_str(MISSING_VALUE),
        }
    }
}
