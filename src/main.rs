//! Cache Panel - operator control panel for a remote TTL cache service
//!
//! Console front end: reads commands from stdin and re-renders the view on
//! every change.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache_panel::console::{execute, ConsoleCommand, HELP};
use cache_panel::view::{render, ViewState};
use cache_panel::{Config, HttpCacheClient, Panel};

/// Main entry point for the cache panel.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so it does not mix with the view)
/// 2. Load configuration from environment variables
/// 3. Mount the panel, which starts polling
/// 4. Spawn the render task
/// 5. Read commands until `quit`, end of input, or Ctrl+C
/// 6. Unmount the panel
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cache_panel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: service_url={}, poll_interval={}ms, default_ttl={}s",
        config.service_url, config.poll_interval_ms, config.default_ttl
    );

    let client = Arc::new(HttpCacheClient::new(config.service_url.clone()));
    let mut panel = Panel::mount(client, &config);

    let render_handle = tokio::spawn(render_changes(panel.subscribe()));
    println!("{}", HELP);

    tokio::select! {
        result = read_commands(&panel) => result?,
        _ = signal::ctrl_c() => info!("Received Ctrl+C, shutting down..."),
    }

    panel.unmount();
    render_handle.abort();
    info!("Panel shutdown complete");
    Ok(())
}

/// Prints the rendered view whenever it differs from the last one printed.
async fn render_changes(mut rx: tokio::sync::watch::Receiver<ViewState>) {
    let mut last: Vec<String> = Vec::new();
    while rx.changed().await.is_ok() {
        let lines = render(&rx.borrow_and_update());
        if lines != last {
            println!("----");
            for line in &lines {
                println!("{}", line);
            }
            last = lines;
        }
    }
}

/// Reads operator commands from stdin until `quit` or end of input.
async fn read_commands(panel: &Panel) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match ConsoleCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(command)) => {
                for out in execute(panel, command).await {
                    println!("{}", out);
                }
            }
            Err(msg) => println!("{}", msg),
        }
    }
    Ok(())
}
