use std::fmt;

/// Output column headers, in the order they are written.
pub const COLUMN_HEADERS: [&str; 14] = [
    "IP Address",
    "Is Public",
    "IP Version",
    "Is Whitelisted",
    "Confidence of Abuse",
    "Country Code",
    "Usage Type",
    "ISP",
    "Domain Name",
    "Hostname(s)",
    "Is Tor",
    "Total Reports",
    "Last Reported At",
    "Last Reported At (Kolkata)",
];

/// Header of the input column holding the addresses to check.
pub const INPUT_COLUMN: &str = "IP";

/// A single output cell, passed through from the API response without coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl fmt::Display for FieldValue {
    /// Booleans render as `True`/`False`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(true) => write!(f, "True"),
            FieldValue::Bool(false) => write!(f, "False"),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Flattened reputation record for one address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentResult {
    /// The address exactly as read from the input file.
    pub ip_address: String,
    pub is_public: FieldValue,
    pub ip_version: FieldValue,
    pub is_whitelisted: FieldValue,
    /// 0-100 abuse confidence score.
    pub abuse_confidence_score: FieldValue,
    pub country_code: FieldValue,
    pub usage_type: FieldValue,
    pub isp: FieldValue,
    pub domain: FieldValue,
    /// Hostnames joined with `", "`.
    pub hostnames: String,
    pub is_tor: FieldValue,
    pub total_reports: FieldValue,
    /// Raw `lastReportedAt` as returned by the API.
    pub last_reported_at: FieldValue,
    /// `lastReportedAt` in Kolkata time, or empty.
    pub last_reported_at_local: String,
}

impl EnrichmentResult {
    /// Cell values in `COLUMN_HEADERS` order.
    pub fn cells(&self) -> [FieldValue; 14] {
        [
            FieldValue::Text(self.ip_address.clone()),
            self.is_public.clone(),
            self.ip_version.clone(),
            self.is_whitelisted.clone(),
            self.abuse_confidence_score.clone(),
            self.country_code.clone(),
            self.usage_type.clone(),
            self.isp.clone(),
            self.domain.clone(),
            FieldValue::Text(self.hostnames.clone()),
            self.is_tor.clone(),
            self.total_reports.clone(),
            self.last_reported_at.clone(),
            FieldValue::Text(self.last_reported_at_local.clone()),
        ]
    }

    /// Looks up a cell by its output header.
    pub fn get(&self, header: &str) -> Option<FieldValue> {
        let idx = COLUMN_HEADERS.iter().position(|h| *h == header)?;
        Some(self.cells()[idx].clone())
    }
}
