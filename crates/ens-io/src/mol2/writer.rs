use crate::error::Result;
use ens_core::Molecule;
use std::io::Write;

/// Placeholder for an absent optional column that is followed by a present one.
const PLACEHOLDER: &str = "****";

/// A MOL2 writer.
///
/// Writes the MOLECULE, ATOM and BOND records of each molecule, and the
/// SUBSTRUCTURE record when the molecule has substructures. Coordinates and
/// charges are written with four decimals unless they carry more.
pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W> {
    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }
    /// Returns a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }
    /// Unwraps and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Writer<W>
where
    W: Write,
{
    /// Creates a MOL2 writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_molecule(&mut self, molecule: &Molecule) -> Result<()> {
        self.write_header(molecule)?;
        self.write_atoms(molecule)?;
        self.write_bonds(molecule)?;
        self.write_substructures(molecule)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    fn write_header(&mut self, molecule: &Molecule) -> Result<()> {
        let info = molecule.info();
        let counts = info
            .counts
            .values()
            .iter()
            .map(|v| format!("{v:>5}"))
            .collect::<String>();
        let w = &mut self.inner;
        writeln!(w, "@<TRIPOS>MOLECULE")?;
        writeln!(w, "{}", info.name)?;
        writeln!(w, "{counts}")?;
        writeln!(w, "{}", info.mol_type.as_ref().map_or("", |t| t.as_str()))?;
        writeln!(w, "{}", info.charge_type.as_ref().map_or("", |c| c.as_str()))?;
        writeln!(w, "{}", info.status_bits.as_deref().unwrap_or(PLACEHOLDER))?;
        if let Some(comment) = &info.comment {
            writeln!(w, "{comment}")?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn write_atoms(&mut self, molecule: &Molecule) -> Result<()> {
        writeln!(self.inner, "@<TRIPOS>ATOM")?;
        for idx in 0..molecule.size() {
            let [x, y, z] = molecule.get_coord(idx);
            let optional = [
                molecule.get_subst_id(idx).map(|id| format!(" {id:>5}")),
                molecule
                    .get_subst_name(idx)
                    .map(|name| format!("  {name:<8}")),
                molecule.get_charge(idx).map(|q| format!(" {:>10}", decimal(q))),
                molecule.get_status_bits(idx).map(|s| format!(" {s}")),
            ];
            writeln!(
                self.inner,
                "{:>7} {:<8} {:>10} {:>10} {:>10} {:<8}{}",
                molecule.get_id(idx),
                molecule.get_atom_name(idx),
                decimal(*x),
                decimal(*y),
                decimal(*z),
                molecule.get_atom_type(idx),
                present_prefix(&optional, " "),
            )?;
        }
        Ok(())
    }

    fn write_bonds(&mut self, molecule: &Molecule) -> Result<()> {
        if molecule.get_bonds().is_empty() {
            return Ok(());
        }
        writeln!(self.inner, "@<TRIPOS>BOND")?;
        for bond in molecule.get_bonds() {
            write!(
                self.inner,
                "{:>6} {:>5} {:>5} {:>4}",
                bond.id, bond.origin, bond.target, bond.order
            )?;
            if let Some(status) = &bond.status_bits {
                write!(self.inner, " {status}")?;
            }
            writeln!(self.inner)?;
        }
        Ok(())
    }

    fn write_substructures(&mut self, molecule: &Molecule) -> Result<()> {
        if molecule.get_substructures().is_empty() {
            return Ok(());
        }
        writeln!(self.inner, "@<TRIPOS>SUBSTRUCTURE")?;
        for subst in molecule.get_substructures() {
            let optional = [
                subst.subst_type.as_ref().map(|t| format!(" {t:<16}")),
                subst.dict_type.map(|d| format!(" {d}")),
                subst.chain.as_ref().map(|c| format!(" {c:<4}")),
                subst.sub_type.as_ref().map(|t| format!(" {t:<4}")),
                subst.inter_bonds.map(|n| format!(" {n:>4}")),
                subst.status.as_ref().map(|s| format!(" {s}")),
                subst.comment.as_ref().map(|c| format!(" {c}")),
            ];
            writeln!(
                self.inner,
                "{:>6} {:<8} {:>6}{}",
                subst.id,
                subst.name,
                subst.root_atom,
                present_prefix(&optional, " "),
            )?;
        }
        Ok(())
    }
}

/// Four decimals, or the shortest exact form when four would lose precision.
fn decimal(value: f32) -> String {
    let fixed = format!("{value:.4}");
    if fixed.parse::<f32>() == Ok(value) {
        fixed
    } else {
        value.to_string()
    }
}

/// Concatenate optional columns up to the last present one, filling gaps with
/// the placeholder so later columns keep their position.
fn present_prefix(fields: &[Option<String>], separator: &str) -> String {
    let Some(last) = fields.iter().rposition(Option::is_some) else {
        return String::new();
    };
    fields[..=last]
        .iter()
        .map(|field| match field {
            Some(text) => text.clone(),
            None => format!("{separator}{PLACEHOLDER}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_str;
    use ens_test_data::TestFile;

    fn round_trip(text: &str) -> (Vec<Molecule>, Vec<Molecule>) {
        let molecules = read_str(text).unwrap();
        let mut writer = Writer::new(Vec::new());
        for molecule in &molecules {
            writer.write_molecule(molecule).unwrap();
        }
        let written = String::from_utf8(writer.into_inner()).unwrap();
        (molecules, read_str(&written).unwrap())
    }

    #[test]
    fn test_round_trip() {
        for file in [
            TestFile::benzene(),
            TestFile::chloroacetamide(),
            TestFile::glygly(),
            TestFile::multi(),
            TestFile::user_charges(),
        ] {
            let (parsed, reread) = round_trip(file.as_str());
            assert_eq!(parsed, reread);
        }
    }

    #[test]
    fn test_written_layout() {
        let molecules = read_str(TestFile::benzene().as_str()).unwrap();
        let mut writer = Writer::new(Vec::new());
        writer.write_molecule(&molecules[0]).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "@<TRIPOS>MOLECULE");
        assert_eq!(lines[1], "benzene");
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["12", "12", "1", "0", "0"]);
        assert_eq!(lines[5], "****");
        assert!(text.contains("@<TRIPOS>SUBSTRUCTURE"));
        let first_atom = lines[9].split_whitespace().collect::<Vec<_>>();
        assert_eq!(first_atom, ["1", "C1", "1.3820", "0.0000", "0.0000", "C.ar", "1", "BNZ1", "-0.0618"]);
    }

    #[test]
    fn test_keeps_precision() {
        let molecules = read_str(TestFile::user_charges().as_str()).unwrap();
        let mut writer = Writer::new(Vec::new());
        writer.write_molecule(&molecules[0]).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let first_atom = text
            .lines()
            .find(|l| l.trim_start().starts_with("1 "))
            .unwrap()
            .split_whitespace()
            .collect::<Vec<_>>();
        assert_eq!(first_atom[2], "1.23456");
        assert_eq!(first_atom[8], "0.123456");

        let reread = read_str(&text).unwrap();
        assert_eq!(reread[0].get_coord(0), &[1.23456, -0.5, 2.0]);
        assert_eq!(reread[0].get_charge(0), Some(0.123456));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decimal(1.382), "1.3820");
        assert_eq!(decimal(-0.0618), "-0.0618");
        assert_eq!(decimal(-0.654321), "-0.654321");
    }

    #[test]
    fn test_placeholder_gaps() {
        let fields = [None, Some(" BNZ1".to_string()), None];
        assert_eq!(present_prefix(&fields, " "), " **** BNZ1");
        assert_eq!(present_prefix(&[None, None], " "), "");
    }
}
