//! IANA timezone resolution backed by the `chrono-tz` database.

use chrono_tz::Tz;

use crate::error::TimeError;

/// Zone used when the caller does not pass one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Resolve an exact IANA identifier such as `America/New_York`.
///
/// Matching is case-sensitive and performs no abbreviation expansion.
pub fn resolve(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}
