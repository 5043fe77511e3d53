use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_MAX_PAGES: usize = 50;

#[derive(Parser, Debug)]
#[command(
    name = "pdf-outline",
    version,
    about = "Extract a title and heading outline from PDF text layers",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Used when no subcommand is given.
    #[command(flatten)]
    pub extract: ExtractArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one outline JSON file per PDF in the input directory.
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long, env = "PDF_OUTLINE_INPUT_DIR", default_value = "/app/input")]
    pub input_dir: PathBuf,

    #[arg(long, env = "PDF_OUTLINE_OUTPUT_DIR", default_value = "/app/output")]
    pub output_dir: PathBuf,

    /// Only the first N pages of each document are read.
    #[arg(long, env = "PDF_OUTLINE_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Optional path for a JSON report covering every processed document.
    #[arg(long)]
    pub report_path: Option<PathBuf>,
}
