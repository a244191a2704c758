use crate::errors::ScanError;
use reqwest;
use serde_json::Value;
use tracing;

/// Lookback window sent with every check.
pub const MAX_AGE_IN_DAYS: &str = "90";

/// Client for the AbuseIPDB `check` endpoint.
#[derive(Clone)]
pub struct AbuseIpDbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AbuseIpDbClient {
    /// Creates a new `AbuseIpDbClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Full URL of the check endpoint.
    /// * `api_key` - The API key sent in the `Key` header.
    pub fn new(base_url: String, api_key: String) -> Result<Self, ScanError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            ScanError::ExternalApi(format!("Failed to create AbuseIPDB client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Checks one address against AbuseIPDB.
    ///
    /// # Arguments
    ///
    /// * `ip` - The address to look up. Passed through unvalidated.
    ///
    /// # Returns
    ///
    /// * `Result<serde_json::Value, ScanError>` - The full JSON response body.
    pub async fn check(&self, ip: &str) -> Result<Value, ScanError> {
        // Build URL with proper parameter encoding
        let url = reqwest::Url::parse_with_params(
            &self.base_url,
            &[("ipAddress", ip), ("maxAgeInDays", MAX_AGE_IN_DAYS)],
        )
        .map_err(|e| ScanError::ExternalApi(format!("Failed to build URL: {}", e)))?;

        tracing::debug!("GET {} (Key: [REDACTED])", url);

        let response = self
            .client
            .get(url)
            .header("Key", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ScanError::ExternalApi(format!("AbuseIPDB request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("AbuseIPDB returned error {} for {}: {}", status, ip, error_text);
            return Err(ScanError::ExternalApi(format!(
                "AbuseIPDB returned {}: {}",
                status, error_text
            )));
        }

        let data = response.json().await.map_err(|e| {
            ScanError::ExternalApi(format!("Failed to parse AbuseIPDB response: {}", e))
        })?;

        Ok(data)
    }
}
