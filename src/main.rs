//! Launchboard - Launch Records Dashboard
//!
//! Serves a browser dashboard over a fixed CSV dataset of rocket launches:
//! filter by launch site and payload mass range, view a launch-outcome pie
//! chart and a payload-vs-outcome scatter plot.

mod charts;
mod config;
mod data;
mod server;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = config::Cli::parse();

    let launches = data::LaunchData::load(&cli.data)
        .with_context(|| format!("loading launch records from {}", cli.data.display()))?;
    let (min_payload, max_payload) = launches.payload_bounds();
    tracing::info!(
        rows = launches.row_count(),
        sites = launches.launch_sites().len(),
        min_payload,
        max_payload,
        "dataset loaded"
    );

    let state = server::AppState::new(launches);
    server::serve(state, cli.bind_addr()).await
}
