//! Automatic 2D Lewis-structure layout and drawing for small molecules.
//! It derives valence and electron-domain counts from the bond graph, places atoms either from
//! supplied 2D coordinates or by a breadth-first VSEPR heuristic, fits the result onto a
//! fixed-size surface, and draws bonds, lone-pair dots and atom labels.
//!
//! # Features
//!
//! - **Electron bookkeeping** — Valence electrons, lone pairs and electron
//!   domains per atom from a fixed main-group table
//! - **Two placement modes** — Supplied 2D coordinates used verbatim, or a
//!   deterministic VSEPR layout grown from the most connected heavy atom
//! - **Canvas fitting** — Uniform scaling and centering with a padding margin
//! - **Format-neutral drawing** — Line, disc and text commands on any
//!   [`Surface`], with an SVG writer for recorded [`Drawing`]s
//! - **SDF input** — V2000 molfiles including PubChem data items
//!
//! # Quick Start
//!
//! The main entry point is [`render_lewis`], which takes a [`Molecule`], a
//! [`LayoutConfig`] and a surface, and returns the [`LewisLayout`] it drew:
//!
//! ```
//! use lewis_layout::{Atom, Bond, Molecule};
//! use lewis_layout::{DrawCommand, Drawing, LayoutConfig, LayoutMode, render_lewis};
//!
//! // Water: one oxygen bonded to two hydrogens, no 2D coordinates
//! let mut molecule = Molecule::new();
//! molecule.atoms.push(Atom::new("O", [0.000, 0.000, 0.000]));
//! molecule.atoms.push(Atom::new("H", [0.757, 0.586, 0.000]));
//! molecule.atoms.push(Atom::new("H", [-0.757, 0.586, 0.000]));
//! molecule.bonds.push(Bond::single(0, 1));
//! molecule.bonds.push(Bond::single(0, 2));
//!
//! let config = LayoutConfig::default();
//! let mut drawing = Drawing::new(config.canvas.width, config.canvas.height);
//! let layout = render_lewis(Some(&molecule), &config, &mut drawing).unwrap();
//!
//! // Placement grew from the oxygen
//! assert_eq!(layout.mode, LayoutMode::Vsepr);
//! assert_eq!(layout.seed, Some(0));
//!
//! // Oxygen: 6 valence electrons, 2 used by bonds, 2 lone pairs
//! let oxygen = &layout.atom_info[0];
//! assert_eq!(oxygen.lone_pairs, 2);
//! assert_eq!(oxygen.total_domains, 4);
//!
//! // Two bond strokes, two dot pairs, three labels
//! assert_eq!(drawing.lines().count(), 2);
//! let dots = drawing
//!     .commands
//!     .iter()
//!     .filter(|c| matches!(c, DrawCommand::Disc { radius, .. } if *radius == config.style.dot_radius))
//!     .count();
//! assert_eq!(dots, 4);
//! assert_eq!(drawing.texts().count(), 3);
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — SDF reading and SVG writing
//! - [`lay_out`] — The layout pipeline without drawing
//! - [`render_lewis`] — Layout plus drawing onto a [`Surface`]
//! - [`LayoutConfig`] — Geometry, canvas and style settings
//!
//! # Data Types
//!
//! ## Input Structures
//!
//! - [`Molecule`] — Atoms, bonds, optional 2D coordinates and compound metadata
//! - [`Atom`] — Element symbol and 3D coordinates
//! - [`Bond`] — Atom index pair with a bond order
//! - [`CompoundInfo`] — Descriptive record (CID, name, formula, weight, SMILES)
//!
//! ## Layout Structures
//!
//! - [`MolecularGraph`] — Adjacency lists and symmetric bond-order lookup
//! - [`AtomInfo`] — Valence, bonded electrons, lone pairs and domains per atom
//! - [`Position`] — 2D point attached to an atom index
//! - [`LewisLayout`] — Everything one layout pass produced
//!
//! ## Drawing
//!
//! - [`Surface`] — Fixed-size drawing target
//! - [`DrawCommand`] — Line, disc or text primitive
//! - [`Drawing`] — Recording surface
//! - [`Color`] — sRGB color parsed from `#rrggbb`

mod layout;
mod model;
mod render;

pub mod io;

pub use model::atom::Atom;
pub use model::graph::MolecularGraph;
pub use model::metadata::CompoundInfo;
pub use model::molecule::{Bond, Molecule};

pub use layout::{
    AngleSlots, AtomInfo, Bounds, CanvasConfig, DEFAULT_VALENCE, GeometryConfig, LayoutConfig,
    LayoutMode, LewisLayout, Position, Resolution, StyleConfig, angular_distance, choose_seed,
    direction, domain_angles, estimate_atom_info, lay_out, lay_out_sized, load_config,
    normalize_positions, resolve_positions, valence_electrons,
};

pub use layout::Error as LayoutError;

pub use render::{
    Color, DEFAULT_LABEL_COLOR, DrawCommand, Drawing, ParseColorError, Surface, draw_layout,
    element_color, render_lewis,
};
