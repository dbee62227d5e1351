use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lewis",
    about = "Automatic 2D Lewis structure drawing",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lay out a molecule and write its Lewis structure as SVG
    #[command(visible_alias = "d")]
    Draw(DrawArgs),

    /// Print valence, lone-pair and position details for every atom
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

/// Structure input options shared by all commands.
#[derive(Args)]
pub struct InputOptions {
    /// Input SDF/molfile (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// SDF with a 2D conformer whose coordinates are used for placement
    #[arg(long = "coords-2d", value_name = "FILE")]
    pub coords_2d: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Layout settings, applied on top of the defaults or --config.
#[derive(Args)]
#[command(next_help_heading = "Layout")]
pub struct LayoutOptions {
    /// TOML file with [layout], [canvas] and [style] tables
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Surface width
    #[arg(long, value_name = "PX")]
    pub width: Option<f64>,

    /// Surface height
    #[arg(long, value_name = "PX")]
    pub height: Option<f64>,

    /// Margin kept free on every side of the surface
    #[arg(long, value_name = "PX")]
    pub padding: Option<f64>,

    /// Bond length used when no 2D coordinates are available
    #[arg(long = "bond-length", value_name = "UNITS")]
    pub bond_length: Option<f64>,
}

#[derive(Args)]
pub struct DrawArgs {
    #[command(flatten)]
    pub input: InputOptions,

    /// Output SVG file (stdout if omitted and not a terminal)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutOptions,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub layout: LayoutOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
