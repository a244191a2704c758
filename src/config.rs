use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ScanError;

pub const DEFAULT_API_URL: &str = "https://api.abuseipdb.com/api/v2/check";
pub const DEFAULT_INPUT_FILE: &str = "input_ips.xlsx";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub request_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ScanError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            api_key: lookup("ABUSEIPDB_API_KEY")
                .ok_or_else(|| {
                    ScanError::Config("ABUSEIPDB_API_KEY environment variable required".into())
                })
                .and_then(|key| {
                    if key.trim().is_empty() {
                        return Err(ScanError::Config("ABUSEIPDB_API_KEY cannot be empty".into()));
                    }
                    Ok(key)
                })?,
            api_url: lookup("ABUSEIPDB_URL")
                .filter(|s| !s.trim().is_empty())
                .map(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        return Err(ScanError::Config(
                            "ABUSEIPDB_URL must start with http:// or https://".into(),
                        ));
                    }
                    Ok(url)
                })
                .transpose()?
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            input_file: lookup("INPUT_FILE")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string())
                .into(),
            output_dir: lookup("OUTPUT_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| ".".to_string())
                .into(),
            request_delay_ms: lookup("REQUEST_DELAY_MS")
                .map(|raw| {
                    raw.trim().parse().map_err(|_| {
                        ScanError::Config("REQUEST_DELAY_MS must be a non-negative integer".into())
                    })
                })
                .transpose()?
                .unwrap_or(DEFAULT_REQUEST_DELAY_MS),
        };

        // Never log the API key
        tracing::debug!("AbuseIPDB URL: {}", config.api_url);
        tracing::debug!("Input file: {}", config.input_file.display());
        tracing::debug!("Output directory: {}", config.output_dir.display());
        tracing::debug!("Request delay: {}ms", config.request_delay_ms);

        Ok(config)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("ABUSEIPDB_API_KEY", "secret")])).unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.input_file, PathBuf::from("input_ips.xlsx"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.request_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("ABUSEIPDB_API_KEY", "   ")])).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ABUSEIPDB_API_KEY", "k"),
            ("ABUSEIPDB_URL", "http://127.0.0.1:9000/check"),
            ("INPUT_FILE", "ips.ods"),
            ("OUTPUT_DIR", "/tmp/out"),
            ("REQUEST_DELAY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:9000/check");
        assert_eq!(config.input_file, PathBuf::from("ips.ods"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.request_delay_ms, 0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("ABUSEIPDB_API_KEY", "k"),
            ("ABUSEIPDB_URL", "ftp://example.com"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("http://"));

        let err = Config::from_lookup(lookup_from(&[
            ("ABUSEIPDB_API_KEY", "k"),
            ("REQUEST_DELAY_MS", "1.5s"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("REQUEST_DELAY_MS"));
    }
}
