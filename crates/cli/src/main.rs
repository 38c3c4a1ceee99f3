//! Academic portal CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** — merge the optional TOML file, environment, and
//!    flags into a [`transport::ClientConfig`].
//! 2. **Wire observability** — install `tracing-subscriber` (text or JSON) on
//!    stderr. All spans and events from the workspace crates flow through it.
//! 3. **Construct infrastructure** — build the [`transport::HttpPortalClient`]
//!    and hand it to the flows as a [`portal::PortalService`].
//! 4. **Run one command** — print its output on stdout and exit non-zero if the
//!    portal did not serve the page.

mod args;
mod flows;
mod settings;
mod telemetry;
mod viewstate;

use anyhow::{Context, Result};
use clap::Parser;
use transport::HttpPortalClient;

use crate::args::Cli;
use crate::settings::FileSettings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format);

    let file = match &cli.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let config = settings::resolve(file, cli.base_url, cli.timeout_secs)?;
    let client = HttpPortalClient::new(&config).context("building portal client")?;

    let outcome = flows::run(&client, cli.command).await?;
    println!("{}", outcome.render(cli.json)?);
    outcome.ensure_success()
}
