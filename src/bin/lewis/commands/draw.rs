use anyhow::{Context, Result, bail};

use lewis_layout::io::{DrawingWriter, Format};
use lewis_layout::{CompoundInfo, Drawing, Molecule, render_lewis};

use super::read_molecule;
use crate::cli::DrawArgs;
use crate::config::build_layout_config;
use crate::display::{
    Context as DisplayContext, Progress, print_compound_info, print_layout_summary,
    print_structure_info,
};
use crate::io::{create_drawing_target, infer_output_format, target_label};
use crate::util::text::truncate;

const TOTAL_STEPS: u8 = 3;

pub fn run_draw(args: DrawArgs, ctx: DisplayContext) -> Result<()> {
    check_output_format(&args)?;
    let config = build_layout_config(&args.layout)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let (molecule, attached_2d) = read_molecule(&args.input)?;
    progress.complete_step("Reading structure", &read_details(&molecule, attached_2d));

    if ctx.interactive {
        if let Some(info) = &molecule.info {
            print_compound_info(info);
        }
        print_structure_info(&molecule);
    }

    progress.step("Laying out Lewis structure");
    let mut drawing = Drawing::new(config.canvas.width, config.canvas.height);
    let layout = render_lewis(Some(&molecule), &config, &mut drawing);
    let layout_details = match &layout {
        Some(layout) => vec![
            format!("Place atoms ({})", layout.mode),
            format!(
                "Emit {} strokes, {} discs, {} labels",
                drawing.lines().count(),
                drawing.discs().count(),
                drawing.texts().count()
            ),
        ],
        None => vec!["Structure has no atoms; writing an empty canvas".to_string()],
    };
    progress.complete_step("Laying out Lewis structure", &layout_details);

    if ctx.interactive {
        if let Some(layout) = &layout {
            print_layout_summary(layout);
        }
    }

    progress.step("Writing output");
    let target = create_drawing_target(args.output.as_deref())?;
    DrawingWriter::new(target, Format::Svg)
        .write(&drawing)
        .context("Failed to write SVG")?;
    let destination = target_label(args.output.as_deref());
    progress.complete_step("Writing output", &[format!("Write SVG → {destination}")]);

    progress.finish(&finish_summary(&molecule));

    Ok(())
}

fn read_details(molecule: &Molecule, attached_2d: bool) -> Vec<String> {
    let mut details = vec![format!(
        "Parse SDF ({} atoms, {} bonds)",
        molecule.atom_count(),
        molecule.bond_count()
    )];
    if attached_2d {
        details.push("Attach 2D conformer".to_string());
    }
    details
}

fn check_output_format(args: &DrawArgs) -> Result<()> {
    if let Some(path) = &args.output {
        if infer_output_format(path).is_none() {
            bail!(
                "Cannot infer format from '{}'. Use an .svg output path.",
                path.display()
            );
        }
    }
    Ok(())
}

fn finish_summary(molecule: &Molecule) -> String {
    let name = molecule
        .info
        .as_ref()
        .and_then(CompoundInfo::display_name)
        .unwrap_or_else(|| molecule.hill_formula());
    if name.is_empty() {
        "Drawing complete".to_string()
    } else {
        format!("Drew {}", truncate(&name, 31))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lewis_layout::Atom;

    #[test]
    fn summary_names_the_compound_or_its_formula() {
        let mut mol = Molecule::new();
        assert_eq!(finish_summary(&mol), "Drawing complete");

        mol.atoms.push(Atom::new("O", [0.0; 3]));
        mol.atoms.push(Atom::new("H", [0.0; 3]));
        mol.atoms.push(Atom::new("H", [0.0; 3]));
        assert_eq!(finish_summary(&mol), "Drew H2O");

        mol.info = Some(CompoundInfo {
            name: Some("water".into()),
            ..Default::default()
        });
        assert_eq!(finish_summary(&mol), "Drew water");
    }
}
