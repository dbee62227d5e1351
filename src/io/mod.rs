//! Reading molecules and writing drawings.
//!
//! Structures come in as MDL V2000 SDF/molfile records, optionally with
//! PubChem data items, and drawings go out as SVG. [`MoleculeReader`] and
//! [`DrawingWriter`] pick the codec from a [`Format`].

use std::fmt;
use std::io::{BufRead, Write};

pub mod error;

mod sdf {
    pub mod reader;
}

mod svg {
    pub mod writer;
}

pub use error::Error;

use crate::model::molecule::Molecule;
use crate::render::Drawing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Sdf,
    Svg,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Sdf => write!(f, "SDF"),
            Format::Svg => write!(f, "SVG"),
        }
    }
}

/// Reads the first structure record from a text source.
pub struct MoleculeReader<R> {
    reader: R,
    format: Format,
}

impl<R: BufRead> MoleculeReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    pub fn read(self) -> Result<Molecule, Error> {
        match self.format {
            Format::Sdf => sdf::reader::read(self.reader),
            Format::Svg => Err(Error::UnsupportedReadFormat(self.format)),
        }
    }

    /// Reads a structure and keeps only its planar `(x, y)` coordinates.
    pub fn read_coordinates_2d(self) -> Result<Vec<[f64; 2]>, Error> {
        let molecule = self.read()?;
        Ok(molecule
            .atoms
            .iter()
            .map(|atom| [atom.position[0], atom.position[1]])
            .collect())
    }
}

/// Serializes a recorded [`Drawing`].
pub struct DrawingWriter<W> {
    writer: W,
    format: Format,
}

impl<W: Write> DrawingWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn write(self, drawing: &Drawing) -> Result<(), Error> {
        match self.format {
            Format::Svg => svg::writer::write(self.writer, drawing),
            Format::Sdf => Err(Error::UnsupportedWriteFormat(self.format)),
        }
    }
}

/// Attaches a 2D conformer to `molecule` as its `atoms_2d`.
///
/// The coordinates are only attached when there is exactly one per atom;
/// otherwise the molecule is left untouched.
pub fn attach_coordinates_2d(
    molecule: &mut Molecule,
    coordinates: Vec<[f64; 2]>,
) -> Result<(), Error> {
    if coordinates.len() != molecule.atom_count() {
        return Err(Error::ConformerMismatch {
            expected: molecule.atom_count(),
            found: coordinates.len(),
        });
    }
    molecule.atoms_2d = Some(coordinates);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use std::io::Cursor;

    const METHANE_2D: &str = "\
methane
  test

  2  1  0  0  0  0  0  0  0  0999 V2000
    2.5000   -1.2500    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    3.5000   -1.2500    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
M  END
$$$$
";

    #[test]
    fn reads_planar_coordinates() {
        let coords = MoleculeReader::new(Cursor::new(METHANE_2D), Format::Sdf)
            .read_coordinates_2d()
            .unwrap();
        assert_eq!(coords, vec![[2.5, -1.25], [3.5, -1.25]]);
    }

    #[test]
    fn svg_is_not_a_structure_format() {
        let err = MoleculeReader::new(Cursor::new(""), Format::Svg)
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedReadFormat(Format::Svg)));
    }

    #[test]
    fn sdf_is_not_a_drawing_format() {
        let drawing = Drawing::new(10.0, 10.0);
        let err = DrawingWriter::new(Vec::new(), Format::Sdf)
            .write(&drawing)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedWriteFormat(Format::Sdf)));
    }

    #[test]
    fn attaches_matching_conformer_only() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("C", [0.0; 3]));
        mol.atoms.push(Atom::new("H", [0.0; 3]));

        let err = attach_coordinates_2d(&mut mol, vec![[0.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::ConformerMismatch {
                expected: 2,
                found: 1
            }
        ));
        assert!(mol.atoms_2d.is_none());

        attach_coordinates_2d(&mut mol, vec![[0.0, 0.0], [1.0, 0.0]]).unwrap();
        assert!(mol.has_coordinates_2d());
    }
}
