use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Parse an RFC 3339 timestamp, as used by the feed's `updated` elements.
///
/// Surrounding whitespace is tolerated; the offset is normalized to UTC.
pub(crate) fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::InvalidTimestamp(input.to_string()))
}

/// Parse an XML-schema boolean: `true`, `false`, `1` or `0`.
pub(crate) fn parse_boolean(input: &str) -> Result<bool> {
    match input.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::InvalidBoolean(input.to_string())),
    }
}

/// Parse a decimal byte count.
pub(crate) fn parse_byte_count(input: &str) -> Result<u64> {
    input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInteger(input.to_string()))
}
