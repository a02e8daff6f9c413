//! `israeli`: validate, normalize and format Israeli identifiers.
//!
//! ```text
//! israeli phone 050-123-4567 --type mobile --style international
//! israeli bank IL620108000000099999999 --output json
//! ```
//!
//! Exits with 0 when the value is valid and 1 when it is not.

mod cli;
mod config;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;
use israeli_validator::ReasonCode;

use crate::cli::Cli;
use crate::config::Settings;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&logging::LogConfig::from_env())?;

    let settings = Settings::load(cli.config.as_deref(), &cli.overrides())?;
    let kind = cli.command.kind();
    let outcome = cli.command.run(&settings);

    tracing::info!(
        kind = kind.as_str(),
        valid = outcome.is_valid(),
        reason = outcome.reason().map(ReasonCode::as_str),
        "validated"
    );

    output::write(
        &mut std::io::stdout().lock(),
        &outcome,
        settings.output,
        settings.style_for(kind),
    )?;

    Ok(if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
