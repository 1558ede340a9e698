use super::record::{
    is_comment, parse_atom_line, parse_bond_line, parse_molecule_header,
    parse_substructure_line, record_header, Record,
};
use crate::error::{Error, Result};
use ens_core::Molecule;
use std::io::BufRead;

/// A MOL2 reader.
///
/// Streams one molecule at a time; a file may hold any number of molecules,
/// each starting at its own `@<TRIPOS>MOLECULE` record.
pub struct Reader<R> {
    inner: R,
    line_number: usize,
    pending: Option<(usize, String)>,
}

impl<R> Reader<R> {
    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }
    /// Returns a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }
    /// Unwraps and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates a MOL2 reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_number: 0,
            pending: None,
        }
    }

    /// Reads the next molecule. Returns `Ok(None)` at end of input.
    pub fn read_molecule(&mut self) -> Result<Option<Molecule>> {
        let header_line = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some((line_no, line)) => match record_header(&line) {
                    Some(Record::Molecule) => break line_no,
                    Some(other) => {
                        tracing::debug!(line = line_no, record = ?other, "record outside a molecule skipped");
                    }
                    None if line.trim().is_empty() || is_comment(&line) => {}
                    None => {
                        tracing::debug!(line = line_no, "text outside a molecule skipped");
                    }
                },
            }
        };

        let (header_lines, mut next) = self.read_block(false)?;
        let info = parse_molecule_header(header_line, &header_lines)?;

        let mut atoms = None;
        let mut bonds = Vec::new();
        let mut substructures = Vec::new();

        while let Some((line_no, record)) = next.take() {
            if record == Record::Molecule {
                self.pending = Some((line_no, "@<TRIPOS>MOLECULE".to_string()));
                break;
            }
            let (lines, following) = self.read_block(true)?;
            next = following;
            match record {
                Record::Atom => {
                    let parsed = lines
                        .iter()
                        .map(|(n, l)| parse_atom_line(*n, l))
                        .collect::<Result<Vec<_>>>()?;
                    atoms.get_or_insert_with(Vec::new).extend(parsed);
                }
                Record::Bond => {
                    for (n, l) in &lines {
                        bonds.push(parse_bond_line(*n, l)?);
                    }
                }
                Record::Substructure => {
                    for (n, l) in &lines {
                        substructures.push(parse_substructure_line(*n, l)?);
                    }
                }
                other => {
                    tracing::debug!(
                        line = line_no,
                        record = ?other,
                        skipped_lines = lines.len(),
                        "unsupported record skipped"
                    );
                }
            }
        }

        let atoms = atoms.ok_or_else(|| Error::MissingSection {
            molecule: info.name.clone(),
            section: "ATOM",
        })?;
        tracing::debug!(
            molecule = %info.name,
            atoms = atoms.len(),
            bonds = bonds.len(),
            substructures = substructures.len(),
            "parsed molecule"
        );
        Ok(Some(Molecule::from_records(
            info,
            atoms,
            bonds,
            substructures,
        )?))
    }

    /// Returns an iterator over molecules starting from the current stream position.
    pub fn molecules(&mut self) -> Molecules<'_, R> {
        Molecules {
            reader: self,
            done: false,
        }
    }

    /// Data lines up to the next record header, plus that header.
    ///
    /// Comment lines are dropped. Blank lines are dropped when `skip_blank`
    /// is set and otherwise kept, with trailing blanks trimmed.
    fn read_block(
        &mut self,
        skip_blank: bool,
    ) -> Result<(Vec<(usize, String)>, Option<(usize, Record)>)> {
        let mut lines = Vec::new();
        let next = loop {
            let Some((line_no, line)) = self.next_line()? else {
                break None;
            };
            if let Some(record) = record_header(&line) {
                break Some((line_no, record));
            }
            if is_comment(&line) || (skip_blank && line.trim().is_empty()) {
                continue;
            }
            lines.push((line_no, line));
        };
        while lines.last().is_some_and(|(_, l)| l.trim().is_empty()) {
            lines.pop();
        }
        Ok((lines, next))
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(pending));
        }
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(Some((self.line_number, buf)))
    }
}

/// Iterator over the molecules of a [`Reader`]. Stops after the first error.
pub struct Molecules<'a, R> {
    reader: &'a mut Reader<R>,
    done: bool,
}

impl<R> Iterator for Molecules<'_, R>
where
    R: BufRead,
{
    type Item = Result<Molecule>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_molecule() {
            Ok(Some(molecule)) => Some(Ok(molecule)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ens_core::{AtomField, AtomValue, BondOrder, ChargeType, InfoKind, MoleculeType};
    use ens_test_data::TestFile;

    #[test]
    fn test_basic_read() {
        let input = TestFile::benzene().as_str();
        let mut reader = Reader::new(input.as_bytes());
        let mol = reader.read_molecule().unwrap().unwrap();

        assert_eq!(mol.name(), "benzene");
        assert_eq!(mol.size(), 12);
        assert_eq!(mol.get_bonds().len(), 12);
        assert_eq!(mol.info().mol_type, Some(MoleculeType::Small));
        assert_eq!(mol.info().charge_type, Some(ChargeType::Gasteiger));
        assert_eq!(
            mol.information(InfoKind::Comment).to_string(),
            "Benzene test ligand"
        );
        assert_eq!(
            mol.information(InfoKind::StatusBits).to_string(),
            "Missed or not mentioned Value"
        );
        assert_eq!(mol.get_substructures().len(), 1);
        assert!(reader.read_molecule().unwrap().is_none());
    }

    #[test]
    fn test_skips_comments_and_unknown_records() {
        let mol = crate::read_str(TestFile::chloroacetamide().as_str())
            .unwrap()
            .remove(0);
        assert_eq!(mol.size(), 9);
        assert_eq!(mol.get_bonds().len(), 8);
        assert_eq!(mol.info().status_bits, None);
        assert_eq!(mol.info().comment, None);
        assert_eq!(mol.atoms_of("Cl", AtomField::AtomName), vec![AtomValue::Text("CL1")]);
        assert_eq!(mol.bond_orders()[&2], vec![BondOrder::Double, BondOrder::Amide]);
    }

    #[test]
    fn test_multiple_molecules() {
        let mut reader = Reader::new(TestFile::multi().as_str().as_bytes());
        let molecules: Vec<_> = reader.molecules().collect::<Result<_>>().unwrap();
        assert_eq!(molecules.len(), 2);
        assert_eq!(molecules[0].name(), "water");
        assert_eq!(molecules[1].name(), "methane");
        assert_eq!(molecules[1].get_charge(0), None);
        assert_eq!(molecules[1].info().counts.substructures, None);
        assert_eq!(molecules[1].bonded_atoms()[&1], vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_missing_atom_section() {
        let input = "@<TRIPOS>MOLECULE\nempty\n0 0\nSMALL\nNO_CHARGES\n@<TRIPOS>BOND\n";
        let err = crate::read_str(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "molecule `empty` has no @<TRIPOS>ATOM record"
        );
    }

    #[test]
    fn test_error_line_numbers() {
        let input = "@<TRIPOS>MOLECULE\nbad\n1\nSMALL\nNO_CHARGES\n@<TRIPOS>ATOM\n1 C1 0.0 0.0\n";
        match crate::read_str(input).unwrap_err() {
            Error::Parse { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_dangling_bond() {
        let input = "@<TRIPOS>MOLECULE\nbad\n1 1\nSMALL\nNO_CHARGES\n\
                     @<TRIPOS>ATOM\n1 C1 0.0 0.0 0.0 C.3\n@<TRIPOS>BOND\n1 1 2 1\n";
        let err = crate::read_str(input).unwrap_err();
        assert!(matches!(err, Error::Core(ens_core::Error::UnknownAtom { atom: 2, .. })));
    }

    #[test]
    fn test_crlf_and_lowercase_headers() {
        let input = "@<tripos>molecule\r\nlig\r\n1\r\nSMALL\r\nNO_CHARGES\r\n@<tripos>atom\r\n1 O1 1.0 2.0 3.0 O.3\r\n";
        let mol = crate::read_str(input).unwrap().remove(0);
        assert_eq!(mol.get_coord(0), &[1.0, 2.0, 3.0]);
        assert_eq!(mol.get_atom_type(0), "O.3");
    }

    #[test]
    fn test_empty_input() {
        assert!(crate::read_str("").unwrap().is_empty());
        assert!(crate::read_str("# nothing here\n\n").unwrap().is_empty());
    }
}
