//! Roster configuration for the household command
//!
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./household.toml` or `./.household.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/household/config.toml`
//! 4. Default values

pub mod file_config;
mod loader;

pub use file_config::{FileConfig, FilePersonConfig};
pub use loader::ConfigLoader;
