pub mod handlers;
pub mod models;

use crate::handlers::{Outcome, lookup, validate};
use crate::models::args::{AppCommands, Cli};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use whub::domain::config::ApiConfig;
use whub::features::catalog::Catalog;
use whub::kernel::config::load_config;
use whub_logger::{ConsoleTarget, LevelFilter, Logger};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.global.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let _log = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .console(Some(ConsoleTarget::Stderr))
        .level(level)
        .init()?;

    let mut stdout = io::stdout().lock();
    let json = cli.global.json;

    let outcome = match cli.command {
        AppCommands::Types {} => lookup::list_types(&mut stdout, json)?,
        AppCommands::Show { id } => lookup::show(&mut stdout, &id, json)?,
        AppCommands::Positions { id } => lookup::positions(&mut stdout, &id, json)?,
        AppCommands::Info { id } => lookup::info(&mut stdout, &id, json)?,
        AppCommands::Allowed { id, position } => {
            lookup::allowed(&mut stdout, &id, &position, json)?
        },
        AppCommands::Filter { id, positions } => {
            lookup::filter(&mut stdout, &id, &positions, json)?
        },
        AppCommands::Validate { id, positions, exclusivity } => {
            // Registry lookups are static; only validation depends on configuration.
            let cfg: ApiConfig =
                load_config(cli.global.config.as_deref()).context("Configuration is malformed")?;
            let slices = whub::init(&cfg).map_err(|e| anyhow!("Catalog bootstrap failed: {e}"))?;
            let catalog = slices
                .iter()
                .find_map(|slice| slice.downcast_ref::<Catalog>())
                .context("Catalog slice is not enabled")?;
            validate::validate(&mut stdout, catalog, &id, &positions, exclusivity, json)?
        },
    };

    stdout.flush()?;

    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Failure => ExitCode::FAILURE,
    })
}
