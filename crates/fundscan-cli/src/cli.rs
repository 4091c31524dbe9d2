//! Command-line argument parsing.

use clap::{ArgAction, Parser, ValueEnum};
use fundscan_extractor::OverflowPolicy;
use std::path::PathBuf;

/// Fundscan - classify fund documents and report their sustainability data.
#[derive(Debug, Parser)]
#[command(name = "fundscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FUNDSCAN_CONFIG", default_value = "config.yaml")]
    pub config: PathBuf,

    /// Directory scanned for *.pdf when no files are given
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Directory reports are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// What to do with a snippet that overflows a summary chunk
    #[arg(long, value_enum, default_value_t = OverflowArg::CarryOver)]
    pub overflow: OverflowArg,

    /// Do not draw the per-page progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// PDF files to process instead of the input directory
    pub files: Vec<PathBuf>,
}

/// Chunk overflow policy options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    /// Start the next chunk with the overflowing snippet
    CarryOver,
    /// Discard the overflowing snippet
    Drop,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::CarryOver => OverflowPolicy::CarryOver,
            OverflowArg::Drop => OverflowPolicy::Drop,
        }
    }
}
