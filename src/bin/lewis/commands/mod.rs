mod draw;
mod inspect;

use draw::run_draw;
use inspect::run_inspect;

use anyhow::{Context, Result};

use lewis_layout::Molecule;
use lewis_layout::io::{Error as IoError, Format, MoleculeReader, attach_coordinates_2d};

use crate::cli::{Command, InputOptions};
use crate::display::Context as DisplayContext;
use crate::io::{infer_input_format, open_structure};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Draw(args) => run_draw(args, ctx),
        Command::Inspect(args) => run_inspect(args, ctx),
    }
}

/// Reads the input structure and, when requested, attaches its 2D conformer.
///
/// Returns the molecule and whether a conformer was attached.
fn read_molecule(opts: &InputOptions) -> Result<(Molecule, bool)> {
    let format = resolve_input_format(opts)?;
    let input = open_structure(opts.input.as_deref())?;
    let mut molecule = MoleculeReader::new(input, format)
        .read()
        .context("Failed to read structure")?;

    let Some(path) = &opts.coords_2d else {
        return Ok((molecule, false));
    };

    let input = open_structure(Some(path))?;
    let coordinates = MoleculeReader::new(input, Format::Sdf)
        .read_coordinates_2d()
        .context("Failed to read 2D conformer")?;

    match attach_coordinates_2d(&mut molecule, coordinates) {
        Ok(()) => Ok((molecule, true)),
        Err(e @ IoError::ConformerMismatch { .. }) => {
            log::warn!("{e}; falling back to VSEPR placement");
            Ok((molecule, false))
        }
        Err(e) => Err(e.into()),
    }
}

fn resolve_input_format(opts: &InputOptions) -> Result<Format> {
    let Some(path) = &opts.input else {
        return Ok(Format::Sdf);
    };
    infer_input_format(path).with_context(|| {
        format!(
            "Cannot infer format from '{}'. Expected a .sdf or .mol file.",
            path.display()
        )
    })
}
