/// Reputation enrichment workflow
///
/// This module provides the steps of a scan:
/// 1. Map one AbuseIPDB response onto a flat `EnrichmentResult`
/// 2. Check every address in order, pausing between calls
/// 3. Load input, enrich, and write the report in one run
use crate::abuseipdb_client::AbuseIpDbClient;
use crate::config::Config;
use crate::errors::{ResultExt, ScanError};
use crate::input::load_identifiers;
use crate::models::{EnrichmentResult, FieldValue};
use crate::output::{output_path, write_results};
use crate::pacing::Pacer;
use crate::time::to_local_display;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::PathBuf;

/// Converts one JSON value into a cell, without coercion.
///
/// Missing keys and `null` become an empty string.
fn field(data: &Value, key: &str) -> FieldValue {
    match data.get(key) {
        None | Some(Value::Null) => FieldValue::empty(),
        Some(Value::Bool(b)) => FieldValue::Bool(*b),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Float(n.as_f64().unwrap_or_default()),
        },
        Some(Value::String(s)) => FieldValue::Text(s.clone()),
        Some(other) => FieldValue::Text(other.to_string()),
    }
}

fn join_hostnames(data: &Value) -> String {
    match data.get("hostnames") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Flatten an AbuseIPDB `check` response into an `EnrichmentResult`
///
/// Reads the nested `data` object. Any absent field maps to an empty string.
/// Fails only when `lastReportedAt` is present but not a valid timestamp.
pub fn map_record(ip: &str, response: &Value) -> Result<EnrichmentResult, ScanError> {
    let missing = Value::Null;
    let data = response.get("data").unwrap_or(&missing);

    let last_reported_at = field(data, "lastReportedAt");
    let last_reported_at_local = match &last_reported_at {
        FieldValue::Text(s) => to_local_display(s)?,
        other => {
            return Err(ScanError::Timestamp(format!(
                "lastReportedAt is not a string: {}",
                other
            )))
        }
    };

    Ok(EnrichmentResult {
        ip_address: ip.to_string(),
        is_public: field(data, "isPublic"),
        ip_version: field(data, "ipVersion"),
        is_whitelisted: field(data, "isWhitelisted"),
        abuse_confidence_score: field(data, "abuseConfidenceScore"),
        country_code: field(data, "countryCode"),
        usage_type: field(data, "usageType"),
        isp: field(data, "isp"),
        domain: field(data, "domain"),
        hostnames: join_hostnames(data),
        is_tor: field(data, "isTor"),
        total_reports: field(data, "totalReports"),
        last_reported_at,
        last_reported_at_local,
    })
}

/// Check every address in input order
///
/// Waits on `pacer` between consecutive calls (not after the last one).
/// The first failure aborts the batch; no partial results are returned.
pub async fn enrich_all<P>(
    client: &AbuseIpDbClient,
    pacer: &P,
    ips: &[String],
) -> Result<Vec<EnrichmentResult>, ScanError>
where
    P: Pacer + ?Sized,
{
    let total = ips.len();
    let mut results = Vec::with_capacity(total);

    for (idx, ip) in ips.iter().enumerate() {
        tracing::info!("[{}/{}] Checking {}", idx + 1, total, ip);

        let response = client
            .check(ip)
            .await
            .with_context(|| format!("Lookup failed for {}", ip))?;
        let record =
            map_record(ip, &response).with_context(|| format!("Mapping failed for {}", ip))?;

        tracing::debug!(
            "{}: confidence={} reports={}",
            ip,
            record.abuse_confidence_score,
            record.total_reports
        );
        results.push(record);

        if idx + 1 < total {
            pacer.wait().await;
        }
    }

    Ok(results)
}

/// Complete scan for one input file
///
/// This is the main entry point that orchestrates the entire run:
/// 1. Load addresses from the input spreadsheet
/// 2. Enrich each one via AbuseIPDB
/// 3. Write the report into `config.output_dir`
///
/// Returns the path of the written report. Nothing is written on failure.
pub async fn scan_workflow<P>(
    config: &Config,
    pacer: &P,
    now: DateTime<Utc>,
) -> Result<PathBuf, ScanError>
where
    P: Pacer + ?Sized,
{
    tracing::info!("Step 1: Loading addresses from {}", config.input_file.display());
    let ips = load_identifiers(&config.input_file)?;

    tracing::info!("Step 2: Checking {} address(es) against AbuseIPDB", ips.len());
    let client = AbuseIpDbClient::new(config.api_url.clone(), config.api_key.clone())?;
    let results = enrich_all(&client, pacer, &ips).await?;

    let path = output_path(&config.output_dir, now);
    tracing::info!("Step 3: Writing {} result(s) to {}", results.len(), path.display());
    write_results(&path, &results).context("Failed to write report")?;

    Ok(path)
}
