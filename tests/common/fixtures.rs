//! Test fixtures and constants.

/// Every registered code in declaration order
pub const ALL_CODES: [&str; 5] = [
    "iso8601",
    "log_millis",
    "euro_tz",
    "us_ampm",
    "with_millis_tzname",
];

/// Pinned instants
pub mod instants {
    /// Winter, New York on EST
    pub const WINTER: &str = "2024-01-15T12:00:00.987654Z";

    /// Summer, New York on EDT
    pub const SUMMER: &str = "2024-07-01T12:00:00.250000Z";

    /// Whole second with no fractional part
    pub const WHOLE_SECOND: &str = "2024-03-05T14:07:09Z";
}

/// Full-string patterns for each format, UTC
pub mod patterns {
    pub const ISO8601: &str = r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}[+-]\d{4}";
    pub const LOG_MILLIS: &str = r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}";
    pub const EURO_TZ: &str = r"\d{2}/[A-Z][a-z]{2}/\d{4}:\d{2}:\d{2}:\d{2} [+-]\d{4}";
    pub const US_AMPM: &str = r"[A-Z][a-z]{2} \d{2}, \d{4} \d{2}:\d{2}:\d{2} (AM|PM)";
    pub const WITH_MILLIS_TZNAME: &str =
        r"\d{4} [A-Z][a-z]{2} \d{2} \d{2}:\d{2}:\d{2}\.\d{3} [A-Z]+";
}
