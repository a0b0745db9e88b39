use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber;

use prospekt_guard::config::GuardConfig;
use prospekt_guard::query::QueryIntent;
use prospekt_guard::session::{SessionGate, SessionId};

/// Exercise the guard layer from the command line: run queries through
/// intent triage and the session gate.
#[derive(Parser, Debug)]
#[command(name = "prospekt-guard", version, about)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Queries to run through the gate
    #[arg(required = true)]
    queries: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    info!("Starting Prospekt Guard");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults match the assistant's 10 searches per minute)
    let config = match &args.config {
        Some(path) => GuardConfig::from_file(path)?,
        None => GuardConfig::default(),
    };
    info!(
        max_requests = config.throttle.max_requests,
        window_ms = config.throttle.window_ms,
        "Configuration loaded"
    );

    let gate = SessionGate::new(config.throttle.clone());
    let session = SessionId::new();
    info!(session = %session, "Session opened");

    for query in &args.queries {
        let intent = QueryIntent::classify(query);
        let decision = gate.check(session);

        if decision.allowed {
            info!(
                query = %query,
                intent = ?intent,
                remaining = decision.remaining,
                "Request permitted"
            );
        } else {
            warn!(
                query = %query,
                wait_secs = decision.retry_after_secs().unwrap_or(0),
                "Too many requests"
            );
        }
    }

    Ok(())
}
