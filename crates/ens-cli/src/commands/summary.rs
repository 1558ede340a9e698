use super::load_all;
use crate::cli::Format;
use ens_core::Molecule;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Serialize)]
struct MoleculeSummary<'a> {
    name: &'a str,
    atoms: usize,
    heavy_atoms: usize,
    bonds: usize,
    substructures: usize,
    composition: BTreeMap<String, usize>,
    centroid: [f32; 3],
    net_charge: Option<f32>,
}

impl<'a> MoleculeSummary<'a> {
    fn new(molecule: &'a Molecule) -> Self {
        let has_charges = (0..molecule.size()).any(|i| molecule.get_charge(i).is_some());
        MoleculeSummary {
            name: molecule.name(),
            atoms: molecule.size(),
            heavy_atoms: molecule.heavy_atom_count(),
            bonds: molecule.get_bonds().len(),
            substructures: molecule.iter_substructures().count(),
            composition: molecule
                .element_groups()
                .into_iter()
                .map(|(symbol, ids)| (symbol, ids.len()))
                .collect(),
            centroid: molecule.centroid(),
            net_charge: has_charges.then(|| molecule.net_charge()),
        }
    }
}

pub fn execute(input: &Path, format: Format) -> anyhow::Result<()> {
    let molecules = load_all(input)?;
    let summaries: Vec<_> = molecules.iter().map(MoleculeSummary::new).collect();

    match format {
        Format::Text => {
            for (i, s) in summaries.iter().enumerate() {
                let [x, y, z] = s.centroid;
                println!("[{i}] {}", s.name);
                println!("  atoms: {} ({} heavy)", s.atoms, s.heavy_atoms);
                println!("  bonds: {}", s.bonds);
                println!("  substructures: {}", s.substructures);
                println!(
                    "  composition: {}",
                    s.composition
                        .iter()
                        .map(|(symbol, n)| format!("{symbol}{n}"))
                        .join(" ")
                );
                println!("  centroid: {x:.4} {y:.4} {z:.4}");
                match s.net_charge {
                    Some(q) => println!("  net charge: {q:.4}"),
                    None => println!("  net charge: -"),
                }
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
    }
    Ok(())
}
