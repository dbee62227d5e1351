use crate::model::graph::MolecularGraph;
use crate::model::molecule::Molecule;

/// Valence electron count assumed for symbols missing from the table.
pub const DEFAULT_VALENCE: u8 = 4;

/// Valence electron count for common main-group elements.
pub fn valence_electrons(symbol: &str) -> Option<u8> {
    let v = match symbol {
        "H" | "Li" | "Na" | "K" | "Rb" | "Cs" => 1,
        "He" | "Be" | "Mg" | "Ca" | "Sr" | "Ba" => 2,
        "B" | "Al" | "Ga" => 3,
        "C" | "Si" | "Ge" | "Sn" | "Pb" => 4,
        "N" | "P" | "As" | "Sb" => 5,
        "O" | "S" | "Se" | "Te" => 6,
        "F" | "Cl" | "Br" | "I" | "At" => 7,
        "Ne" | "Ar" | "Kr" | "Xe" | "Rn" => 8,
        _ => return None,
    };
    Some(v)
}

/// Per-atom electron bookkeeping used for lone-pair placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomInfo {
    pub element: String,
    pub valence: u8,
    /// Number of bonded neighbors.
    pub bond_count: usize,
    /// Sum of bond orders to all neighbors.
    pub bonded_electrons: u32,
    pub lone_pairs: usize,
    /// Bonds plus lone pairs.
    pub total_domains: usize,
}

impl AtomInfo {
    /// Carbon and hydrogen are drawn without lone-pair dots.
    pub fn shows_lone_pairs(&self) -> bool {
        self.lone_pairs > 0 && self.element != "C" && self.element != "H"
    }
}

/// Computes one [`AtomInfo`] per atom of `molecule`.
///
/// Lone pairs are `floor((valence - bonded_electrons) / 2)`, clamped at zero,
/// so hypervalent centers simply get none.
pub fn estimate_atom_info(molecule: &Molecule, graph: &MolecularGraph) -> Vec<AtomInfo> {
    molecule
        .atoms
        .iter()
        .enumerate()
        .map(|(i, atom)| {
            let valence = valence_electrons(&atom.element).unwrap_or(DEFAULT_VALENCE);
            let neighbors = graph.neighbors(i);
            let bonded_electrons: u32 = neighbors
                .iter()
                .map(|&j| u32::from(graph.bond_order(i, j)))
                .sum();
            let free = i64::from(valence) - i64::from(bonded_electrons);
            let lone_pairs = if free > 0 { (free / 2) as usize } else { 0 };

            AtomInfo {
                element: atom.element.clone(),
                valence,
                bond_count: neighbors.len(),
                bonded_electrons,
                lone_pairs,
                total_domains: neighbors.len() + lone_pairs,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;

    fn make_water() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("O", [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new("H", [0.96, 0.0, 0.0]));
        mol.atoms.push(Atom::new("H", [-0.24, 0.93, 0.0]));
        mol.bonds.push(Bond::single(0, 1));
        mol.bonds.push(Bond::single(0, 2));
        mol
    }

    fn make_co2() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("O", [-1.16, 0.0, 0.0]));
        mol.atoms.push(Atom::new("C", [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new("O", [1.16, 0.0, 0.0]));
        mol.bonds.push(Bond::new(0, 1, 2));
        mol.bonds.push(Bond::new(1, 2, 2));
        mol
    }

    fn info_for(mol: &Molecule) -> Vec<AtomInfo> {
        estimate_atom_info(mol, &MolecularGraph::from_molecule(mol))
    }

    #[test]
    fn water_oxygen_has_two_lone_pairs() {
        let info = info_for(&make_water());
        let o = &info[0];
        assert_eq!(o.valence, 6);
        assert_eq!(o.bond_count, 2);
        assert_eq!(o.bonded_electrons, 2);
        assert_eq!(o.lone_pairs, 2);
        assert_eq!(o.total_domains, 4);
        assert!(o.shows_lone_pairs());

        for h in &info[1..] {
            assert_eq!(h.lone_pairs, 0);
            assert_eq!(h.total_domains, 1);
            assert!(!h.shows_lone_pairs());
        }
    }

    #[test]
    fn carbon_dioxide_counts_double_bonds() {
        let info = info_for(&make_co2());
        assert_eq!(info[1].bonded_electrons, 4);
        assert_eq!(info[1].lone_pairs, 0);
        assert_eq!(info[1].total_domains, 2);
        for o in [&info[0], &info[2]] {
            assert_eq!(o.bonded_electrons, 2);
            assert_eq!(o.lone_pairs, 2);
            assert_eq!(o.total_domains, 3);
        }
    }

    #[test]
    fn unknown_element_defaults_to_four() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("Xx", [0.0; 3]));
        let info = info_for(&mol);
        assert_eq!(info[0].valence, DEFAULT_VALENCE);
        assert_eq!(info[0].lone_pairs, 2);
    }

    #[test]
    fn hypervalent_atom_gets_zero_lone_pairs() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("S", [0.0; 3]));
        for _ in 0..6 {
            mol.atoms.push(Atom::new("F", [0.0; 3]));
        }
        for i in 1..=6 {
            mol.bonds.push(Bond::single(0, i));
        }
        let info = info_for(&mol);
        assert_eq!(info[0].bonded_electrons, 6);
        assert_eq!(info[0].lone_pairs, 0);

        mol.bonds[0].order = 3;
        let info = info_for(&mol);
        assert_eq!(info[0].bonded_electrons, 8);
        assert_eq!(info[0].lone_pairs, 0);
        assert_eq!(info[0].total_domains, 6);
    }

    #[test]
    fn odd_free_electrons_round_down() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("N", [0.0; 3]));
        mol.atoms.push(Atom::new("O", [0.0; 3]));
        mol.bonds.push(Bond::new(0, 1, 2));
        let info = info_for(&mol);
        assert_eq!(info[0].lone_pairs, 1);
    }

    #[test]
    fn lone_fluorine_has_three_lone_pairs() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("F", [0.0; 3]));
        let info = info_for(&mol);
        assert_eq!(info[0].lone_pairs, 3);
        assert_eq!(info[0].total_domains, 3);
    }

    #[test]
    fn estimation_is_deterministic() {
        let mol = make_co2();
        assert_eq!(info_for(&mol), info_for(&mol));
    }
}
