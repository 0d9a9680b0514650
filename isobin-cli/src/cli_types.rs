//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use isobin_lib::{ConvertOptions, Settings, WriteMode};

#[derive(Parser, Debug)]
#[command(name = "isobin")]
#[command(about = "Convert ISO + CUE disc images into BIN + CUE pairs", long_about = None)]
pub(crate) struct Cli {
    /// An image file, or a directory whose subfolders contain .iso images
    pub path: PathBuf,

    /// Directory for converted files (defaults to next to each image)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Prefix added to output file names (default "_")
    #[arg(long)]
    pub prefix: Option<String>,

    /// Clear a PREGAP after the track it precedes instead of carrying it forward
    #[arg(long)]
    pub reset_pregap: bool,

    /// Use the mode token (AUDIO, MODE1/2352) as each track's type
    #[arg(long)]
    pub type_from_mode: bool,

    /// Write output files in place rather than through a temporary file
    #[arg(long)]
    pub no_atomic: bool,

    /// Show the planned tracks without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Settings file to use instead of ~/.config/isobin/settings.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging with timestamps
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line flags over the loaded settings.
    pub(crate) fn convert_options(&self, settings: &Settings) -> ConvertOptions {
        let mut options = settings.to_options();
        if let Some(dir) = &self.output_dir {
            options = options.output_dir(dir);
        }
        if let Some(prefix) = &self.prefix {
            options = options.output_prefix(prefix.clone());
        }
        if self.reset_pregap {
            options = options.reset_pregap(true);
        }
        if self.type_from_mode {
            options = options.type_from_mode(true);
        }
        if self.no_atomic {
            options = options.write_mode(WriteMode::Direct);
        }
        options
    }
}
