use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "map3d", version, about = "Height-field map renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full paint of a height field to a PNG or SVG file
    Render {
        /// Settings file (.json or .toml); defaults are used when omitted
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Whitespace or comma separated rows of integer heights
        #[arg(long)]
        heights: Option<PathBuf>,
        #[arg(long)]
        output: PathBuf,
    },
    /// Feed synthetic rows through the incremental redraw path
    Stream {
        #[arg(long)]
        settings: Option<PathBuf>,
        #[arg(long, default_value_t = 64)]
        rows: usize,
        /// Final frame, PNG only
        #[arg(long)]
        output: PathBuf,
        /// Also write a numbered snapshot every K rows
        #[arg(long)]
        snapshot_every: Option<usize>,
        /// Blank each row's previous footprint before redrawing it
        #[arg(long)]
        clear_above: bool,
    },
    /// Write the default settings to a file
    Defaults {
        #[arg(long)]
        output: PathBuf,
    },
}
