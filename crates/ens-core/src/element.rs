//! Element assignment from SYBYL atom types.
use pdbtbx::Element;

/// SYBYL types that do not name a chemical element.
const GENERIC_TYPES: &[&str] = &["Du", "LP", "Any", "Hal", "Het", "Hev"];

/// Assign an element to a MOL2 atom.
///
/// The SYBYL type prefix before the first `.` decides (`C.ar` is carbon, `Cl`
/// is chlorine). Dummy and wildcard types fall back to the atom name: a
/// capital followed by a lowercase letter is read as a two letter symbol
/// (`Cl1`), otherwise the first letter is used (`CA` is carbon).
pub fn assign_element(atom_type: &str, atom_name: &str) -> Option<Element> {
    let prefix = atom_type.split('.').next().unwrap_or_default();
    let generic = GENERIC_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(prefix));
    if !generic {
        if let Some(element) = Element::from_symbol(&prefix.to_ascii_uppercase()) {
            return Some(element);
        }
    }
    from_atom_name(atom_name)
}

fn from_atom_name(atom_name: &str) -> Option<Element> {
    let mut chars = atom_name.chars().skip_while(|c| c.is_ascii_digit());
    let first = chars.next().filter(char::is_ascii_uppercase)?;
    if let Some(second) = chars.next().filter(char::is_ascii_lowercase) {
        let symbol: String = [first, second].iter().collect();
        if let Some(element) = Element::from_symbol(&symbol.to_ascii_uppercase()) {
            return Some(element);
        }
    }
    Element::from_symbol(&first.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sybyl_prefix() {
        assert_eq!(assign_element("C.ar", "C1"), Some(Element::C));
        assert_eq!(assign_element("N.am", "N1"), Some(Element::N));
        assert_eq!(assign_element("Cl", "CL1"), Some(Element::Cl));
        assert_eq!(assign_element("O.co2", "OXT"), Some(Element::O));
    }

    #[test]
    fn test_generic_types_use_atom_name() {
        assert_eq!(assign_element("Du", "Br1"), Some(Element::Br));
        assert_eq!(assign_element("Du", "CA"), Some(Element::C));
        assert_eq!(assign_element("LP", "1HB"), Some(Element::H));
        assert_eq!(assign_element("Du", "x1"), None);
    }
}
