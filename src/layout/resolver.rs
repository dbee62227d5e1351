//! Resolution of 2D atom positions before canvas fitting.
//!
//! Two strategies are supported:
//!
//! - **Direct** — when the molecule carries one externally supplied 2D
//!   coordinate per atom, those are used with the y-axis flipped into
//!   screen orientation.
//! - **VSEPR** — otherwise, a breadth-first placement starts from the most
//!   connected heavy atom at the origin and puts each unplaced neighbor at a
//!   fixed bond length along the next free electron-domain angle. Slots that
//!   point at neighbors placed earlier are reserved first so that bonds and
//!   lone pairs do not stack.
//!
//! Both strategies are deterministic: the same molecule (with the same
//! adjacency order) always resolves to the same coordinates.

use std::collections::VecDeque;
use std::fmt;

use super::angles::{AngleSlots, direction};
use super::valence::AtomInfo;
use crate::model::graph::MolecularGraph;
use crate::model::molecule::Molecule;

/// Which strategy produced a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Direct,
    Vsepr,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Direct => write!(f, "2D coordinates"),
            LayoutMode::Vsepr => write!(f, "VSEPR placement"),
        }
    }
}

/// A 2D point attached to an atom index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub atom: usize,
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(atom: usize, x: f64, y: f64) -> Self {
        Self { atom, x, y }
    }

    #[inline]
    pub fn point(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Output of [`resolve_positions`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub mode: LayoutMode,
    /// Atom the breadth-first placement started from (VSEPR mode only).
    pub seed: Option<usize>,
    /// One position per atom, ordered by atom index.
    pub positions: Vec<Position>,
    /// Atoms the placement could not reach; they sit at the origin.
    pub unreached: Vec<usize>,
}

pub fn resolve_positions(
    molecule: &Molecule,
    graph: &MolecularGraph,
    info: &[AtomInfo],
    bond_length: f64,
) -> Resolution {
    if let Some(coords) = molecule.coordinates_2d() {
        log::debug!("using supplied 2D coordinates for {} atoms", coords.len());
        return Resolution {
            mode: LayoutMode::Direct,
            seed: None,
            positions: direct_positions(coords),
            unreached: Vec::new(),
        };
    }

    if let Some(coords) = &molecule.atoms_2d {
        log::warn!(
            "ignoring 2D coordinates: {} entries for {} atoms",
            coords.len(),
            molecule.atom_count()
        );
    }

    vsepr_positions(molecule, graph, info, bond_length)
}

fn direct_positions(coords: &[[f64; 2]]) -> Vec<Position> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &[x, y])| Position::new(i, x, -y))
        .collect()
}

/// Picks the non-hydrogen atom with the most neighbors (first one on ties),
/// or atom 0 when every atom is hydrogen.
pub fn choose_seed(molecule: &Molecule, graph: &MolecularGraph) -> Option<usize> {
    if molecule.is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    for (i, atom) in molecule.atoms.iter().enumerate() {
        if atom.is_hydrogen() {
            continue;
        }
        let degree = graph.degree(i);
        if best.is_none_or(|(_, best_degree)| degree > best_degree) {
            best = Some((i, degree));
        }
    }

    Some(best.map_or(0, |(i, _)| i))
}

fn vsepr_positions(
    molecule: &Molecule,
    graph: &MolecularGraph,
    info: &[AtomInfo],
    bond_length: f64,
) -> Resolution {
    let n = molecule.atom_count();
    let seed = choose_seed(molecule, graph);
    let mut placed: Vec<Option<[f64; 2]>> = vec![None; n];
    let mut queue = VecDeque::new();

    if let Some(seed) = seed {
        log::debug!(
            "VSEPR placement seeded at atom {} ({})",
            seed,
            molecule.atoms[seed].element
        );
        placed[seed] = Some([0.0, 0.0]);
        queue.push_back(seed);
    }

    while let Some(current) = queue.pop_front() {
        let Some(origin) = placed[current] else {
            continue;
        };
        let neighbors = graph.neighbors(current);
        let domains = info.get(current).map_or(0, |a| a.total_domains);
        let mut slots = AngleSlots::new(domains.max(neighbors.len()));

        for &nb in neighbors {
            if let Some(p) = placed[nb] {
                slots.claim_closest(direction(origin, p), None);
            }
        }

        for &nb in neighbors {
            if placed[nb].is_some() {
                continue;
            }
            let Some(angle) = slots.claim_next() else {
                break;
            };
            let p = [
                origin[0] + bond_length * angle.cos(),
                origin[1] + bond_length * angle.sin(),
            ];
            log::trace!(
                "placed atom {} at ({:.2}, {:.2}) from atom {}",
                nb,
                p[0],
                p[1],
                current
            );
            placed[nb] = Some(p);
            queue.push_back(nb);
        }
    }

    let unreached: Vec<usize> = (0..n).filter(|&i| placed[i].is_none()).collect();
    if !unreached.is_empty() {
        log::debug!(
            "{} atoms unreachable from the seed, placing them at the origin",
            unreached.len()
        );
    }

    let positions = placed
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let [x, y] = p.unwrap_or([0.0, 0.0]);
            Position::new(i, x, y)
        })
        .collect();

    Resolution {
        mode: LayoutMode::Vsepr,
        seed,
        positions,
        unreached,
    }
}
