use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod domain;
mod session;
mod shell;

use session::DepotSession;

/// Delivery depot simulator: register vehicles and couriers, create orders,
/// assign vehicles, run deliveries.
#[derive(Parser, Debug)]
#[command(name = "depot_sim", version)]
struct Cli {
    /// Script of console commands to run instead of the interactive prompt
    script: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging with environment-based filtering.
    // Example: RUST_LOG=depot_sim=debug cargo run
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    tracing::info!("🚀 Opening depot session");

    // One session per program run; all state dies with it
    let mut session = DepotSession::new();

    match &cli.script {
        Some(path) => shell::run_script(&mut session, path)?,
        None => shell::run_interactive(&mut session)?,
    }

    tracing::info!(
        orders = session.orders().len(),
        couriers = session.depot().couriers().count(),
        "Session closed"
    );

    Ok(())
}
