//! Command-line interface.
//!
//! Without a subcommand the binary launches the TUI. The subcommands print
//! outlines and paths for scripting.

mod commands;
mod common;
pub mod completions;

pub use commands::walk_pages;
pub use common::*;

use crate::config::Config;
use crate::utils::{expand_path, get_config_path};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Browse course outlines from the terminal
#[derive(Parser, Debug)]
#[command(name = "courseoutline", version, about = "Browse course outlines from the terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use an alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Override the backend base URL for this run
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a page of outlines, or every page with --all
    Outlines {
        /// Page number to fetch
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Filter outlines by name
        #[arg(short, long)]
        query: Option<String>,
        /// Walk all pages until the server reports none are left
        #[arg(long, conflicts_with = "page")]
        all: bool,
        /// Output records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the backend endpoints resolved against the base URL
    Endpoints,
    /// Shows logs location
    Logs,
    /// Configuration file location
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file path after applying `--config`
    pub fn config_path(&self) -> PathBuf {
        self.config
            .as_deref()
            .map_or_else(get_config_path, expand_path)
    }

    /// Load the configuration with command-line overrides applied
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        let config = Config::load_or_create(&path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?;
        Ok(config.with_base_url(self.base_url.clone()))
    }

    /// Run the selected subcommand. Must not be called without one.
    pub fn execute(self) -> Result<()> {
        let Some(command) = self.command.as_ref() else {
            anyhow::bail!("No command given");
        };

        match command {
            Commands::Outlines {
                page,
                query,
                all,
                json,
            } => {
                let config = self.load_config()?;
                commands::cmd_outlines(&config, *page, query.clone(), *all, *json)
            }
            Commands::Endpoints => {
                let config = self.load_config()?;
                commands::cmd_endpoints(&config)
            }
            Commands::Logs => {
                commands::cmd_logs();
                Ok(())
            }
            Commands::Config => {
                println!("{}", self.config_path().display());
                Ok(())
            }
            Commands::Completions { shell } => completions::generate(*shell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_launches_tui() {
        let cli = Cli::try_parse_from(["courseoutline"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_outlines_args() {
        let cli = Cli::try_parse_from([
            "courseoutline",
            "--base-url",
            "http://localhost:9000/",
            "outlines",
            "--page",
            "3",
            "-q",
            "calculus",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/"));
        match cli.command {
            Some(Commands::Outlines {
                page,
                query,
                all,
                json,
            }) => {
                assert_eq!(page, 3);
                assert_eq!(query.as_deref(), Some("calculus"));
                assert!(!all);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(Cli::try_parse_from(["courseoutline", "outlines", "--page", "0"]).is_err());
    }

    #[test]
    fn test_all_conflicts_with_page() {
        assert!(
            Cli::try_parse_from(["courseoutline", "outlines", "--all", "--page", "2"]).is_err()
        );
        assert!(Cli::try_parse_from(["courseoutline", "outlines", "--all"]).is_ok());
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cli = Cli::try_parse_from([
            "courseoutline",
            "--config",
            path.to_str().unwrap(),
            "--base-url",
            "http://127.0.0.1:1/",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:1/");
        assert!(path.exists());

        // The override is not persisted
        let saved = Config::load_or_create(&path).unwrap();
        assert_eq!(saved.api.base_url, crate::config::DEFAULT_BASE_URL);
    }
}
