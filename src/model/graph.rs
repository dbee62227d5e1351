//! Connectivity derived from a [`Molecule`]'s bond list.
//!
//! The graph is rebuilt for every layout pass. Bonds whose endpoints fall
//! outside the atom list are dropped here, so every later stage can index
//! atoms without further checks.

use std::collections::HashMap;

use super::molecule::Molecule;

#[derive(Debug, Clone, Default)]
pub struct MolecularGraph {
    /// Neighbor indices per atom, in bond-list order.
    pub adjacency: Vec<Vec<usize>>,
    /// Bond order keyed by both `(a, b)` and `(b, a)`.
    pub bond_orders: HashMap<(usize, usize), u8>,
    /// Number of bonds skipped because they referenced missing atoms.
    pub skipped_bonds: usize,
}

impl MolecularGraph {
    pub fn from_molecule(molecule: &Molecule) -> Self {
        let n = molecule.atom_count();
        let mut adjacency = vec![Vec::new(); n];
        let mut bond_orders = HashMap::with_capacity(molecule.bond_count() * 2);
        let mut skipped_bonds = 0;

        for bond in &molecule.bonds {
            let (a, b) = (bond.from, bond.to);
            if a >= n || b >= n {
                log::warn!(
                    "skipping bond {}-{}: molecule has only {} atoms",
                    a,
                    b,
                    n
                );
                skipped_bonds += 1;
                continue;
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
            bond_orders.insert((a, b), bond.order);
            bond_orders.insert((b, a), bond.order);
        }

        Self {
            adjacency,
            bond_orders,
            skipped_bonds,
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Bond order between two atoms; a missing entry counts as a single bond.
    #[inline]
    pub fn bond_order(&self, a: usize, b: usize) -> u8 {
        self.bond_orders.get(&(a, b)).copied().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;

    fn make_co2() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("O", [-1.16, 0.0, 0.0]));
        mol.atoms.push(Atom::new("C", [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new("O", [1.16, 0.0, 0.0]));
        mol.bonds.push(Bond::new(1, 0, 2));
        mol.bonds.push(Bond::new(1, 2, 2));
        mol
    }

    #[test]
    fn builds_symmetric_adjacency() {
        let graph = MolecularGraph::from_molecule(&make_co2());
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(2), &[1]);
        assert_eq!(graph.degree(1), 2);
    }

    #[test]
    fn bond_order_lookup_works_both_ways() {
        let graph = MolecularGraph::from_molecule(&make_co2());
        assert_eq!(graph.bond_order(0, 1), 2);
        assert_eq!(graph.bond_order(1, 0), 2);
        assert_eq!(graph.bond_order(0, 2), 1);
    }

    #[test]
    fn skips_bonds_to_missing_atoms() {
        let mut mol = make_co2();
        mol.bonds.push(Bond::single(2, 9));
        let graph = MolecularGraph::from_molecule(&mol);
        assert_eq!(graph.skipped_bonds, 1);
        assert_eq!(graph.neighbors(2), &[1]);
        assert_eq!(graph.degree(9), 0);
    }
}
