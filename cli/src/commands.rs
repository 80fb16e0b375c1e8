//! CLI command definitions

use clap::{Parser, Subcommand};
use household_domain::{Compensation, Money, WORK_YEAR_HOURS};
use std::path::PathBuf;

/// CLI arguments for household
#[derive(Parser, Debug)]
#[command(name = "household")]
#[command(author, version, about = "Money, jobs and family income from the command line")]
#[command(long_about = r#"
Household exercises the household domain model from the shell.

Money is written as "<amount> <currency>". The exchange table knows
USD, GBP, EUR and CAN; any other code is passed through unchanged.

Compensation is written as hourly:RATE or salary:AMOUNT.

The household command reads a roster file. Configuration files are
loaded from (in priority order):
1. --config <path>        Explicit roster file
2. ./household.toml       Project-level roster
3. ~/.config/household/config.toml   Global roster

Example:
  household convert "10 USD" GBP
  household add "10 USD" "5 GBP"
  household income hourly:15.5 --hours 40 --raise-percent 0.1
  household household --config family.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress headers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to roster configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert money into another currency
    #[command(alias = "c")]
    Convert {
        #[arg(allow_hyphen_values = true)]
        money: Money,
        target: String,
    },
    /// Add two amounts; the result is in the second amount's currency
    Add {
        #[arg(allow_hyphen_values = true)]
        left: Money,
        #[arg(allow_hyphen_values = true)]
        right: Money,
    },
    /// Subtract the second amount from the first, in the second's currency
    Subtract {
        #[arg(allow_hyphen_values = true)]
        left: Money,
        #[arg(allow_hyphen_values = true)]
        right: Money,
    },
    /// Income for a job, optionally after raises (amount first, then percent)
    #[command(alias = "i")]
    Income {
        compensation: Compensation,

        /// Hours worked
        #[arg(long, default_value_t = WORK_YEAR_HOURS)]
        hours: i64,

        /// Fixed raise added to the pay
        #[arg(long, allow_hyphen_values = true)]
        raise_amount: Option<f64>,

        /// Percentage raise, 0.1 for ten percent
        #[arg(long, allow_hyphen_values = true)]
        raise_percent: Option<f64>,
    },
    /// Build the family from the roster and report household income
    #[command(alias = "h")]
    Household,
}
