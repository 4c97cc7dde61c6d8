//! CLI entry point for the attraction generator.

use austin_attractions::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Pick up XAI_* variables from a local .env file when present
    dotenvy::dotenv().ok();

    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
