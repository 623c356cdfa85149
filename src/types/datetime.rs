//! Conversion of filter dates into the exchange's ISO-8601 form.
//!
//! Filters take dates as `YYYY-MM-DD-HH:MM:SS` (UTC). The exchange expects
//! `YYYY-MM-DDTHH:MM:SS.sssZ` in query strings.

use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::ExchangeError;

/// Convert a `YYYY-MM-DD-HH:MM:SS` date into `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// The input is read as UTC. Anything that does not match the pattern
/// exactly, or names a date that does not exist, is rejected.
///
/// # Example
///
/// ```rust
/// use wallet_exchange_client::types::to_iso8601;
///
/// assert_eq!(
///     to_iso8601("2024-01-02-03:04:05").unwrap(),
///     "2024-01-02T03:04:05.000Z"
/// );
/// assert!(to_iso8601("2024-02-30-00:00:00").is_err());
/// ```
pub fn to_iso8601(input: &str) -> Result<String, ExchangeError> {
    let parsed = PrimitiveDateTime::parse(
        input,
        format_description!("[year]-[month]-[day]-[hour]:[minute]:[second]"),
    )
    .map_err(|e| ExchangeError::InvalidDate(format!("{input:?}: {e}")))?;

    format_iso8601(parsed.assume_utc())
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ` in UTC.
pub fn format_iso8601(datetime: OffsetDateTime) -> Result<String, ExchangeError> {
    datetime
        .to_offset(time::UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .map_err(|e| ExchangeError::InvalidDate(e.to_string()))
}
