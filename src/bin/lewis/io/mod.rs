mod infer;

pub use infer::{input as infer_input_format, output as infer_output_format};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Whether progress and tables should be shown on stderr.
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Opens a structure file, or piped stdin when no path is given.
///
/// Refuses to wait on an interactive terminal for SDF text.
pub fn open_structure(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    let Some(path) = path else {
        if io::stdin().is_terminal() {
            bail!(
                "No input file specified and stdin is a terminal.\n\nUsage: lewis draw -i <INPUT.sdf> or pipe data via stdin."
            );
        }
        return Ok(Box::new(io::stdin().lock()));
    };
    let file = File::open(path)
        .with_context(|| format!("Failed to open structure file: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Creates the SVG destination, or piped stdout when no path is given.
///
/// Markup is never written to an interactive terminal.
pub fn create_drawing_target(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        if io::stdout().is_terminal() {
            bail!(
                "No output file specified and stdout is a terminal.\n\nUsage: lewis draw -i <INPUT> -o <OUTPUT.svg> or pipe output."
            );
        }
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create drawing file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Short name of where a drawing goes, for progress output.
pub fn target_label(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdout".to_string())
}
