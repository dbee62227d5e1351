use anyhow::Result;

use lewis_layout::lay_out;

use super::read_molecule;
use crate::cli::InspectArgs;
use crate::config::build_layout_config;
use crate::display::{
    Context as DisplayContext, print_atom_table, print_compound_info, print_layout_summary,
    print_structure_info,
};

pub fn run_inspect(args: InspectArgs, _ctx: DisplayContext) -> Result<()> {
    let config = build_layout_config(&args.layout)?;
    let (molecule, _) = read_molecule(&args.input)?;

    if let Some(info) = &molecule.info {
        print_compound_info(info);
    }
    print_structure_info(&molecule);

    if molecule.is_empty() {
        log::warn!("structure has no atoms; nothing to lay out");
        return Ok(());
    }

    let layout = lay_out(&molecule, &config);
    print_layout_summary(&layout);
    print_atom_table(&layout);

    Ok(())
}
