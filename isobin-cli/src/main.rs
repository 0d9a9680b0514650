//! isobin CLI
//!
//! Converts an ISO image with a companion CUE sheet into a BIN + CUE pair.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use isobin_lib::settings::{load_settings, settings_path};
use isobin_lib::{ConvertError, collect_inputs};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Every outcome is reported here; the exit status is always success.
    if let Err(e) = run(&cli) {
        log::error!("{e}");
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings_file = cli.config.clone().unwrap_or_else(settings_path);
    let settings = load_settings(&settings_file)?;
    let options = cli.convert_options(&settings);
    log::debug!("Options: {options:?}");

    let inputs = match collect_inputs(&cli.path) {
        Ok(inputs) => inputs,
        Err(ConvertError::MissingInput { .. }) => {
            log::error!("Invalid path provided.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if inputs.is_empty() {
        log::warn!("No .iso images found under {}", cli.path.display());
        return Ok(());
    }

    if cli.dry_run {
        commands::run_dry_run(&inputs, &options);
    } else {
        commands::run_convert(&inputs, &options, cli.quiet);
    }
    Ok(())
}
