//! Parsing of single MOL2 data lines.
//!
//! Every function takes the 1-based line number so errors point back into the
//! file.
use crate::error::{Error, Result};
use ens_core::{AtomRecord, Bond, BondOrder, Counts, MoleculeInfo, Substructure};
use std::str::FromStr;

const RECORD_PREFIX: &str = "@<TRIPOS>";

/// The record types the reader understands. Anything else is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Record {
    Molecule,
    Atom,
    Bond,
    Substructure,
    Other(String),
}

/// Record name of a `@<TRIPOS>NAME` header line, matched case-insensitively.
pub(crate) fn record_header(line: &str) -> Option<Record> {
    let line = line.trim();
    let prefix = line.get(..RECORD_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(RECORD_PREFIX) {
        return None;
    }
    let name = line[RECORD_PREFIX.len()..].trim().to_ascii_uppercase();
    Some(match name.as_str() {
        "MOLECULE" => Record::Molecule,
        "ATOM" => Record::Atom,
        "BOND" => Record::Bond,
        "SUBSTRUCTURE" => Record::Substructure,
        _ => Record::Other(name),
    })
}

pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Blank and `****` fields mean "not given".
fn optional_text(field: Option<&str>) -> Option<String> {
    let field = field?.trim();
    if field.is_empty() || field.chars().all(|c| c == '*') {
        None
    } else {
        Some(field.to_string())
    }
}

fn number<T: FromStr>(line: usize, what: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid {what} `{value}`")))
}

fn optional_number<T: FromStr>(line: usize, what: &str, value: Option<&str>) -> Result<Option<T>> {
    match optional_text(value) {
        Some(value) => number(line, what, &value).map(Some),
        None => Ok(None),
    }
}

/// The positional lines of a `@<TRIPOS>MOLECULE` record.
///
/// `lines` holds (line number, text) pairs with comments already removed;
/// blank lines are kept because position decides the meaning.
pub(crate) fn parse_molecule_header(
    header_line: usize,
    lines: &[(usize, String)],
) -> Result<MoleculeInfo> {
    let (_, name) = lines
        .first()
        .ok_or_else(|| Error::parse(header_line, "MOLECULE record has no name line"))?;
    let (counts_line, counts) = lines
        .get(1)
        .ok_or_else(|| Error::parse(header_line, "MOLECULE record has no counts line"))?;
    let counts = Counts::from_str(counts)
        .map_err(|e| Error::parse(*counts_line, e.to_string()))?;

    let field = |i: usize| optional_text(lines.get(i).map(|(_, text)| text.as_str()));
    let mut info = MoleculeInfo::new(name.trim(), counts);
    info.mol_type = field(2).map(|t| t.as_str().into());
    info.charge_type = field(3).map(|c| c.as_str().into());
    info.status_bits = field(4);
    info.comment = field(5);
    Ok(info)
}

/// `atom_id atom_name x y z atom_type [subst_id [subst_name [charge [status_bit]]]]`
pub(crate) fn parse_atom_line(line_no: usize, line: &str) -> Result<AtomRecord> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() < 6 {
        return Err(Error::parse(
            line_no,
            format!("ATOM line needs at least 6 columns, found {}", cols.len()),
        ));
    }
    Ok(AtomRecord {
        id: number(line_no, "atom id", cols[0])?,
        name: cols[1].to_string(),
        coords: [
            number(line_no, "x coordinate", cols[2])?,
            number(line_no, "y coordinate", cols[3])?,
            number(line_no, "z coordinate", cols[4])?,
        ],
        atom_type: cols[5].to_string(),
        subst_id: optional_number(line_no, "substructure id", cols.get(6).copied())?,
        subst_name: optional_text(cols.get(7).copied()),
        charge: optional_number(line_no, "charge", cols.get(8).copied())?,
        status_bits: optional_text(cols.get(9..).map(|rest| rest.join(" ")).as_deref()),
    })
}

/// `bond_id origin_atom_id target_atom_id bond_type [status_bits]`
pub(crate) fn parse_bond_line(line_no: usize, line: &str) -> Result<Bond> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() < 4 {
        return Err(Error::parse(
            line_no,
            format!("BOND line needs at least 4 columns, found {}", cols.len()),
        ));
    }
    let order = BondOrder::parse(cols[3]).map_err(|e| Error::parse(line_no, e.to_string()))?;
    let mut bond = Bond::new(
        number(line_no, "bond id", cols[0])?,
        number(line_no, "origin atom id", cols[1])?,
        number(line_no, "target atom id", cols[2])?,
        order,
    );
    bond.status_bits = optional_text(cols.get(4..).map(|rest| rest.join(" ")).as_deref());
    Ok(bond)
}

/// `subst_id subst_name root_atom [subst_type [dict_type [chain [sub_type
/// [inter_bonds [status [comment]]]]]]]`
pub(crate) fn parse_substructure_line(line_no: usize, line: &str) -> Result<Substructure> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() < 3 {
        return Err(Error::parse(
            line_no,
            format!(
                "SUBSTRUCTURE line needs at least 3 columns, found {}",
                cols.len()
            ),
        ));
    }
    let mut subst = Substructure::new(
        number(line_no, "substructure id", cols[0])?,
        cols[1],
        number(line_no, "root atom id", cols[2])?,
    );
    subst.subst_type = optional_text(cols.get(3).copied());
    subst.dict_type = optional_number(line_no, "dictionary type", cols.get(4).copied())?;
    subst.chain = optional_text(cols.get(5).copied());
    subst.sub_type = optional_text(cols.get(6).copied());
    subst.inter_bonds = optional_number(line_no, "inter bonds", cols.get(7).copied())?;
    subst.status = optional_text(cols.get(8).copied());
    subst.comment = optional_text(cols.get(9..).map(|rest| rest.join(" ")).as_deref());
    Ok(subst)
}
