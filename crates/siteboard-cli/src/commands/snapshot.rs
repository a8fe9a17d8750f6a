//! `siteboard snapshot` — Fetch all three sections once and print them.

use clap::Args;
use siteboard_client::{ApiClient, SnapshotSource};
use siteboard_common::config::DashboardConfig;

use crate::output;

/// Arguments for the `snapshot` command.
#[derive(Args, Debug, Default)]
pub struct SnapshotArgs {
    /// Print the snapshot as JSON instead of text cards.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `snapshot` command.
///
/// Sections are printed newest first, exactly as the dashboard shows them.
///
/// # Errors
///
/// Returns an error carrying the dashboard's failure message if any of the
/// three requests fails.
pub fn execute(args: &SnapshotArgs, config: &DashboardConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = ApiClient::new(config)?;
    let snapshot = runtime.block_on(client.fetch_snapshot()).map_err(|e| {
        tracing::warn!(kind = %e.kind(), error = %e, "snapshot fetch failed");
        anyhow::anyhow!(e.user_message())
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", output::render_snapshot(&snapshot));
    }
    Ok(())
}
