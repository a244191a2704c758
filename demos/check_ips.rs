use anyhow::Result;
use ip_reputation_scanner::abuseipdb_client::AbuseIpDbClient;
use ip_reputation_scanner::config::Config;
use ip_reputation_scanner::enrichment::enrich_all;
use ip_reputation_scanner::pacing::FixedDelay;

// Checks addresses given on the command line and prints one line per result,
// without reading or writing spreadsheets.
//
//   cargo run --example check_ips -- 8.8.8.8 1.1.1.1
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let ips: Vec<String> = std::env::args().skip(1).collect();
    if ips.is_empty() {
        anyhow::bail!("usage: check_ips <ip> [<ip> ...]");
    }

    let config = Config::from_env()?;
    let client = AbuseIpDbClient::new(config.api_url.clone(), config.api_key.clone())?;
    let pacer = FixedDelay::new(config.request_delay());

    println!("=== AbuseIPDB check ({} address(es)) ===\n", ips.len());
    let results = enrich_all(&client, &pacer, &ips).await?;

    for result in &results {
        println!(
            "{:<40} score={:<4} reports={:<6} country={:<3} tor={:<5} last={}",
            result.ip_address,
            result.abuse_confidence_score.to_string(),
            result.total_reports.to_string(),
            result.country_code.to_string(),
            result.is_tor.to_string(),
            result.last_reported_at_local,
        );
    }

    Ok(())
}
