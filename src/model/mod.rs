//! Core data structures describing the molecules that flow into the layout engine.
//!
//! - [`atom`] – Element symbol plus 3D coordinates, as delivered by the structure source.
//! - [`molecule`] – Atoms, bonds, the optional 2D coordinate list, and descriptive metadata.
//! - [`metadata`] – Compound-level annotations (name, formula, SMILES) shown next to the drawing.
//! - [`graph`] – Adjacency lists and the symmetric bond-order lookup derived from a molecule.
//!
//! The raw molecule ([`Molecule`]) is immutable input; everything derived from it
//! ([`MolecularGraph`] and the layout products in [`crate::layout`]) is rebuilt on
//! every render pass and never cached.
//!
//! [`Molecule`]: molecule::Molecule
//! [`MolecularGraph`]: graph::MolecularGraph

pub mod atom;
pub mod graph;
pub mod metadata;
pub mod molecule;
