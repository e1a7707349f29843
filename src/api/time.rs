use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::{TimeFormatter, DEFAULT_TIMEZONE};

/// Query parameters for /format_time/{format_code}
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormatTimeParams {
    /// Specify a valid IANA timezone (e.g. 'America/New_York'). Defaults to 'UTC'.
    #[param(default = "UTC")]
    pub tz: String,
}

fn default_tz() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl FormatTimeParams {
    /// Build from raw query pairs; a repeated `tz` keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let tz = pairs
            .into_iter()
            .filter(|(key, _)| key == "tz")
            .map(|(_, value)| value)
            .last()
            .unwrap_or_else(default_tz);
        Self { tz }
    }
}

/// Response from the /format_time/{format_code} endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct FormatTimeResponse {
    /// Format code that was applied
    pub format_code: String,
    /// Timezone as supplied by the caller
    pub timezone: String,
    /// Current time rendered in the requested format and timezone
    pub formatted_time: String,
}

/// Get the current time in a specified format and timezone
///
/// Available format_code values:
/// - `iso8601` : yyyy-MM-dd'T'HH:mm:ssZZZZ
/// - `log_millis` : yyyy-MM-dd HH:mm:ss,SSS
/// - `euro_tz` : dd/MMM/yyyy:HH:mm:ss ZZZZ
/// - `us_ampm` : MMM dd, yyyy hh:mm:ss a
/// - `with_millis_tzname` : yyyy MMM dd HH:mm:ss.SSS zzz
///
/// For a list of all available formats, use GET /formats.
#[utoipa::path(
    get,
    path = "/format_time/{format_code}",
    responses(
        (status = 200, description = "Time formatted successfully", body = FormatTimeResponse),
        (status = 400, description = "Unknown format code or timezone"),
    ),
    params(
        ("format_code" = String, Path, description = "One of the codes listed by /formats"),
        FormatTimeParams,
    ),
    tag = "Core"
)]
pub async fn handle_format_time(
    State(formatter): State<Arc<TimeFormatter>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(format_code) = path?;
    let Query(pairs) = query?;
    let params = FormatTimeParams::from_pairs(pairs);

    let formatted = formatter
        .now_in(&format_code, &params.tz)
        .inspect_err(|e| {
            tracing::debug!(
                format_code = %format_code,
                tz = %params.tz,
                error = %e,
                "Rejected format_time request"
            );
        })?;

    tracing::debug!(
        format_code = %formatted.format_code,
        tz = %formatted.timezone,
        "Formatted time"
    );

    Ok(Json(FormatTimeResponse {
        format_code: formatted.format_code,
        timezone: formatted.timezone,
        formatted_time: formatted.formatted_time,
    }))
}
