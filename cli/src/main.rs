//! CLI entrypoint for household
//!
//! Parses arguments, sets up logging and hands each subcommand to the
//! domain layer.

mod commands;
mod config;
mod household;
mod output;

use anyhow::{Context, Result, bail};
use clap::Parser;
use commands::{Cli, Command};
use config::ConfigLoader;
use household::Household;
use household_domain::Job;
use output::ConsoleFormatter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("A command is required. Run with --help for usage.");
    };

    info!(?command, "Running household");

    match command {
        Command::Convert { money, target } => {
            let converted = money.convert(&target);
            println!("{}", ConsoleFormatter::conversion(&money, &converted));
        }
        Command::Add { left, right } => {
            let result = left.add(&right);
            println!("{}", ConsoleFormatter::arithmetic(&left, '+', &right, &result));
        }
        Command::Subtract { left, right } => {
            let result = left.subtract(&right);
            println!("{}", ConsoleFormatter::arithmetic(&left, '-', &right, &result));
        }
        Command::Income {
            compensation,
            hours,
            raise_amount,
            raise_percent,
        } => {
            let mut job = Job::new("cli", compensation);
            if let Some(amount) = raise_amount {
                job.raise_by_amount(amount);
            }
            if let Some(percent) = raise_percent {
                job.raise_by_percent(percent);
            }
            println!(
                "{}",
                ConsoleFormatter::income(job.compensation(), hours, job.calculate_income(hours))
            );
        }
        Command::Household => {
            if let Some(path) = &cli.config {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
            }

            // --no-config skips discovery but still honours an explicit file
            let roster = match (cli.no_config, cli.config.as_deref()) {
                (true, None) => ConfigLoader::load_defaults(),
                (true, Some(path)) => {
                    ConfigLoader::load_file(path).context("Failed to load roster")?
                }
                (false, path) => ConfigLoader::load(path).context("Failed to load roster")?,
            };

            let household = Household::from_config(&roster)?;

            if !cli.quiet {
                println!("{}", ConsoleFormatter::header("Household"));
            }
            println!(
                "{}",
                ConsoleFormatter::household(&household, roster.output.show_members)
            );
        }
    }

    Ok(())
}
