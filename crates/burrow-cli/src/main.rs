//! Burrow CLI Application
//!
//! Terminal and MCP front end for the Burrow workout roadmap.

mod args;
mod cli;
mod config;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use burrow_core::{params::DayRef, session::DEFAULT_USERNAME, Session, SessionBuilder};
use clap::Parser;
use cli::Cli;
use config::Config;
use log::{info, warn};
use mcp::{run_stdio_server, BurrowMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        username,
        base_url,
        document,
        config,
        no_color,
        command,
    } = Args::parse();

    let config = Config::load(config.as_deref()).context("Failed to load configuration")?;

    let mut builder = SessionBuilder::new()
        .with_username(
            username
                .or(config.username)
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
        )
        .with_document_path(document)
        .with_write_back(config.write_back);
    if let Some(base_url) = base_url.or(config.base_url) {
        builder = builder.with_base_url(base_url);
    }
    let mut session = builder.build().context("Failed to configure session")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Burrow started for {}", session.username());

    match command {
        Some(Mole(args)) => {
            Cli::new(session, renderer).mole(&args).await;
            Ok(())
        }
        Some(Serve) => {
            // A failed first load is reported by the tools; `reload` retries.
            if let Err(e) = session.load().await {
                warn!("Starting without a plan: {e}");
            }
            info!("Starting Burrow MCP server");
            run_stdio_server(BurrowMcpServer::new(session))
                .await
                .context("MCP server failed")
        }
        Some(Day(args)) => loaded(session, renderer).await?.show_day(&DayRef::from(args)),
        Some(Stats) => loaded(session, renderer).await?.show_stats(),
        Some(Toggle(args)) => loaded(session, renderer).await?.toggle(&args),
        Some(Roadmap) | None => loaded(session, renderer).await?.show_roadmap(),
    }
}

/// A command handler whose session has fetched the plan.
async fn loaded(session: Session, renderer: TerminalRenderer) -> Result<Cli> {
    let mut cli = Cli::new(session, renderer);
    cli.load().await?;
    Ok(cli)
}
