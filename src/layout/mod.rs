//! The 2D Lewis-structure layout pipeline.
//!
//! [`lay_out`] runs the stages in order and returns everything the renderer
//! (or any other caller) needs:
//!
//! 1. [`MolecularGraph`] — adjacency and bond orders, dropping bonds to missing atoms
//! 2. [`estimate_atom_info`] — valence, lone pairs and electron domains per atom
//! 3. [`resolve_positions`] — supplied 2D coordinates, or breadth-first VSEPR placement
//! 4. [`normalize_positions`] — uniform scale and centering onto the drawing surface
//!
//! None of these stages can fail; unusual input degrades to defaults.

mod angles;
mod config;
mod error;
mod normalize;
mod resolver;
mod valence;

pub use angles::{AngleSlots, angular_distance, direction, domain_angles};
pub use config::{CanvasConfig, GeometryConfig, LayoutConfig, StyleConfig, load_config};
pub use error::Error;
pub use normalize::{Bounds, normalize_positions};
pub use resolver::{LayoutMode, Position, Resolution, choose_seed, resolve_positions};
pub use valence::{AtomInfo, DEFAULT_VALENCE, estimate_atom_info, valence_electrons};

use crate::model::graph::MolecularGraph;
use crate::model::molecule::Molecule;

/// A fully resolved layout, in surface coordinates.
#[derive(Debug, Clone)]
pub struct LewisLayout {
    pub mode: LayoutMode,
    pub seed: Option<usize>,
    pub graph: MolecularGraph,
    pub atom_info: Vec<AtomInfo>,
    /// Normalized positions, one per atom, ordered by atom index.
    pub positions: Vec<Position>,
    /// Atoms that VSEPR placement could not reach.
    pub unreached: Vec<usize>,
    /// Uniform scale applied by the normalizer, `None` for an empty molecule.
    pub scale: Option<f64>,
    pub size: [f64; 2],
}

impl LewisLayout {
    #[inline]
    pub fn point(&self, atom: usize) -> Option<[f64; 2]> {
        self.positions.get(atom).map(Position::point)
    }
}

/// Lays out `molecule` on a surface of the configured canvas size.
pub fn lay_out(molecule: &Molecule, config: &LayoutConfig) -> LewisLayout {
    lay_out_sized(
        molecule,
        config,
        [config.canvas.width, config.canvas.height],
    )
}

/// Lays out `molecule` on a surface of the given `[width, height]`.
pub fn lay_out_sized(molecule: &Molecule, config: &LayoutConfig, size: [f64; 2]) -> LewisLayout {
    let graph = MolecularGraph::from_molecule(molecule);
    let atom_info = estimate_atom_info(molecule, &graph);
    let resolution = resolve_positions(molecule, &graph, &atom_info, config.layout.bond_length);

    let mut positions = resolution.positions;
    let scale = normalize_positions(&mut positions, size[0], size[1], config.canvas.padding);

    LewisLayout {
        mode: resolution.mode,
        seed: resolution.seed,
        graph,
        atom_info,
        positions,
        unreached: resolution.unreached,
        scale,
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;

    fn make_ammonia() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("N", [0.0, 0.0, 0.0]));
        for _ in 0..3 {
            mol.atoms.push(Atom::new("H", [0.0, 0.0, 0.0]));
        }
        for h in 1..4 {
            mol.bonds.push(Bond::single(0, h));
        }
        mol
    }

    #[test]
    fn pipeline_produces_one_entry_per_atom() {
        let mol = make_ammonia();
        let layout = lay_out(&mol, &LayoutConfig::default());
        assert_eq!(layout.mode, LayoutMode::Vsepr);
        assert_eq!(layout.seed, Some(0));
        assert_eq!(layout.atom_info.len(), 4);
        assert_eq!(layout.positions.len(), 4);
        assert_eq!(layout.atom_info[0].lone_pairs, 1);
        assert!(layout.scale.is_some());
    }

    #[test]
    fn pipeline_keeps_positions_inside_surface() {
        let config = LayoutConfig::default();
        let layout = lay_out(&make_ammonia(), &config);
        let pad = config.canvas.padding;
        for p in &layout.positions {
            assert!(p.x >= pad - 1e-9 && p.x <= config.canvas.width - pad + 1e-9);
            assert!(p.y >= pad - 1e-9 && p.y <= config.canvas.height - pad + 1e-9);
        }
    }

    #[test]
    fn sized_layout_uses_given_surface() {
        let layout = lay_out_sized(&make_ammonia(), &LayoutConfig::default(), [800.0, 600.0]);
        assert_eq!(layout.size, [800.0, 600.0]);
        let [cx, cy] = Bounds::of(&layout.positions).unwrap().center();
        assert!((cx - 400.0).abs() < 1e-9);
        assert!((cy - 300.0).abs() < 1e-9);
    }

    #[test]
    fn empty_molecule_has_no_scale() {
        let layout = lay_out(&Molecule::new(), &LayoutConfig::default());
        assert!(layout.positions.is_empty());
        assert_eq!(layout.scale, None);
        assert_eq!(layout.point(0), None);
    }
}
