//! CLI command definitions and dispatch.

pub mod snapshot;
pub mod watch;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use siteboard_common::config::{ConfigLayer, DashboardConfig};
use siteboard_common::constants::{BIN_NAME, ENV_BASE_URL, ENV_POLL_INTERVAL};

/// Siteboard — live dashboard for site hazard, attendance, and delivery reports.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `watch`).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// API base URL, e.g. `https://site.example.com`.
    #[arg(long, global = true, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// Seconds between refresh cycles [default: 15].
    #[arg(long = "interval", global = true, env = ENV_POLL_INTERVAL)]
    pub interval_secs: Option<u64>,

    /// Per-request timeout in seconds (transport default when unset).
    #[arg(long = "timeout", global = true)]
    pub timeout_secs: Option<u64>,

    /// JSON config file with `base_url`, `poll_interval_secs`, `request_timeout_secs`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the live dashboard.
    Watch(watch::WatchArgs),
    /// Fetch once and print all three sections.
    Snapshot(snapshot::SnapshotArgs),
}

impl Cli {
    /// Whether this invocation takes over the terminal with the dashboard.
    #[must_use]
    pub const fn runs_tui(&self) -> bool {
        match &self.command {
            None => true,
            Some(Command::Watch(args)) => !args.headless,
            Some(Command::Snapshot(_)) => false,
        }
    }

    /// Resolves the dashboard configuration: flags and environment first,
    /// then the config file, then defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or the merged
    /// configuration is invalid.
    pub fn resolve_config(&self) -> anyhow::Result<DashboardConfig> {
        let file = match &self.config {
            Some(path) => ConfigLayer::load(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?,
            None => ConfigLayer::default(),
        };
        let flags = ConfigLayer {
            base_url: self.base_url.clone(),
            poll_interval_secs: self.interval_secs,
            request_timeout_secs: self.timeout_secs,
        };
        let config = DashboardConfig::from_layer(flags.or(file))?;
        tracing::debug!(
            base = config.base_endpoint(),
            interval_secs = config.poll_interval_secs,
            "configuration resolved"
        );
        Ok(config)
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    match cli.command {
        None => watch::execute(&watch::WatchArgs::default(), &config),
        Some(Command::Watch(args)) => watch::execute(&args, &config),
        Some(Command::Snapshot(args)) => snapshot::execute(&args, &config),
    }
}
