//! The fixed registry of output formats.

use crate::error::TimeError;

/// Code used by the root endpoint.
pub const DEFAULT_FORMAT: &str = "iso8601";

/// One supported output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Unique key used in `/format_time/{code}`
    pub code: &'static str,
    /// chrono `strftime` pattern
    pub pattern: &'static str,
    /// Cut the six-digit fractional field down to milliseconds after rendering
    pub truncate_to_millis: bool,
    /// Human-readable layout shown in the API documentation
    pub description: &'static str,
}

/// Built-in formats in declaration order.
pub const BUILTIN_FORMATS: [FormatSpec; 5] = [
    FormatSpec {
        code: "iso8601",
        pattern: "%Y-%m-%dT%H:%M:%S%z",
        truncate_to_millis: false,
        description: "yyyy-MM-dd'T'HH:mm:ssZZZZ",
    },
    FormatSpec {
        code: "log_millis",
        pattern: "%Y-%m-%d %H:%M:%S,%6f",
        truncate_to_millis: true,
        description: "yyyy-MM-dd HH:mm:ss,SSS",
    },
    FormatSpec {
        code: "euro_tz",
        pattern: "%d/%b/%Y:%H:%M:%S %z",
        truncate_to_millis: false,
        description: "dd/MMM/yyyy:HH:mm:ss ZZZZ",
    },
    FormatSpec {
        code: "us_ampm",
        pattern: "%b %d, %Y %I:%M:%S %p",
        truncate_to_millis: false,
        description: "MMM dd, yyyy hh:mm:ss a",
    },
    FormatSpec {
        code: "with_millis_tzname",
        pattern: "%Y %b %d %H:%M:%S.%6f %Z",
        truncate_to_millis: true,
        description: "yyyy MMM dd HH:mm:ss.SSS zzz",
    },
];

/// Read-only, ordered lookup table of format specs.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    specs: Vec<FormatSpec>,
}

impl FormatRegistry {
    /// Registry populated with [`BUILTIN_FORMATS`].
    pub fn builtin() -> Self {
        Self {
            specs: BUILTIN_FORMATS.to_vec(),
        }
    }

    /// All codes in declaration order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.code).collect()
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, code: &str) -> Result<&FormatSpec, TimeError> {
        self.specs
            .iter()
            .find(|spec| spec.code == code)
            .ok_or_else(|| TimeError::UnknownFormatCode {
                code: code.to_string(),
                available: self.codes(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
