//! Rendering of instants through the format registry.
//!
//! [`format_instant`] is the pure core that turns an instant into text for one zone
//! and format. [`TimeFormatter`] wraps it with a registry and a clock
//! so that HTTP handlers and the CLI share the same lookup and validation order.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::{Arc, OnceLock};

use super::clock::Clock;
use super::timezone;
use crate::error::TimeError;
use crate::models::{FormatRegistry, FormatSpec, DEFAULT_FORMAT};

fn six_digit_run() -> &'static Regex {
    static SIX_DIGITS: OnceLock<Regex> = OnceLock::new();
    SIX_DIGITS.get_or_init(|| Regex::new("[0-9]{6}").expect("static regex is valid"))
}

/// Render `instant` in `tz` according to `spec`.
///
/// Offset and abbreviation follow the zone's rules at `instant`, so DST
/// transitions are reflected.
pub fn format_instant(instant: DateTime<Utc>, tz: Tz, spec: &FormatSpec) -> String {
    let local = instant.with_timezone(&tz);
    let rendered = local.format(spec.pattern).to_string();

    if spec.truncate_to_millis {
        truncate_to_millis(&rendered)
    } else {
        rendered
    }
}

/// Keep the first three digits of the first six-digit run.
///
/// Textual truncation: `,999999` becomes `,999`, never `,1000`.
/// Strings without a six-digit run are returned unchanged.
pub fn truncate_to_millis(rendered: &str) -> String {
    match six_digit_run().find(rendered) {
        Some(m) => format!(
            "{}{}{}",
            &rendered[..m.start()],
            &m.as_str()[..3],
            &rendered[m.end()..]
        ),
        None => rendered.to_string(),
    }
}

/// Result of formatting the current instant for a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    pub format_code: String,
    /// Timezone exactly as the caller supplied it
    pub timezone: String,
    pub formatted_time: String,
}

/// Formats the clock's current instant using the shared registry.
pub struct TimeFormatter {
    registry: Arc<FormatRegistry>,
    clock: Arc<dyn Clock>,
}

impl TimeFormatter {
    pub fn new(registry: Arc<FormatRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Format the current instant with `code` in the zone named `tz_name`.
    ///
    /// The format code is validated before the timezone.
    pub fn now_in(&self, code: &str, tz_name: &str) -> Result<FormattedTime, TimeError> {
        let spec = self.registry.lookup(code)?;
        let tz = timezone::resolve(tz_name)?;
        let formatted_time = format_instant(self.clock.now(), tz, spec);

        Ok(FormattedTime {
            format_code: code.to_string(),
            timezone: tz_name.to_string(),
            formatted_time,
        })
    }

    /// Current UTC instant in the default format.
    pub fn default_now(&self) -> Result<String, TimeError> {
        let spec = self.registry.lookup(DEFAULT_FORMAT)?;
        Ok(format_instant(self.clock.now(), Tz::UTC, spec))
    }

    /// One UTC example per registered code, in declaration order.
    ///
    /// A single clock read is shared by every example.
    pub fn examples(&self) -> Vec<(&'static str, String)> {
        let now = self.clock.now();
        self.registry
            .iter()
            .map(|spec| (spec.code, format_instant(now, Tz::UTC, spec)))
            .collect()
    }
}
