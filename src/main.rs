use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ip_reputation_scanner::config::Config;
use ip_reputation_scanner::enrichment::scan_workflow;
use ip_reputation_scanner::pacing::FixedDelay;

/// Main entry point for the scanner.
///
/// This function:
/// - Initializes logging and tracing.
/// - Loads configuration from the environment (and `.env`).
/// - Runs the scan with a fixed delay between API calls.
///
/// Any error aborts the run before a report is written.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ip_reputation_scanner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let pacer = FixedDelay::new(config.request_delay());
    let output = scan_workflow(&config, &pacer, Utc::now()).await?;

    println!("Scanning complete. Results saved to {}", output.display());
    Ok(())
}
