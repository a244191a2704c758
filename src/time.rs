//! Timestamp normalization to the fixed Kolkata display offset.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::errors::ScanError;

/// Asia/Kolkata has no DST, so a fixed UTC+05:30 offset is exact.
pub const KOLKATA_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub fn kolkata() -> FixedOffset {
    // In range by construction
    FixedOffset::east_opt(KOLKATA_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parses an ISO-8601 timestamp. A missing offset is read as UTC.
pub fn parse_iso(iso: &str) -> Result<DateTime<FixedOffset>, ScanError> {
    let trimmed = iso.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|e| ScanError::Timestamp(format!("Invalid timestamp '{}': {}", iso, e)))?;
    Ok(Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Converts an ISO-8601 timestamp to `YYYY-MM-DD HH:MM:SS` in Kolkata time.
///
/// Empty input yields an empty string.
pub fn to_local_display(iso: &str) -> Result<String, ScanError> {
    if iso.is_empty() {
        return Ok(String::new());
    }
    let instant = parse_iso(iso)?;
    Ok(instant
        .with_timezone(&kolkata())
        .format(DISPLAY_FORMAT)
        .to_string())
}

/// Parses a display string produced by [`to_local_display`] back into an instant.
pub fn parse_local_display(display: &str) -> Result<DateTime<Utc>, ScanError> {
    let naive = NaiveDateTime::parse_from_str(display, DISPLAY_FORMAT)?;
    kolkata()
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ScanError::Timestamp(format!("Ambiguous local time '{}'", display)))
}

/// Kolkata-time stamp used in output file names.
pub fn file_stamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&kolkata())
        .format(FILE_STAMP_FORMAT)
        .to_string()
}
