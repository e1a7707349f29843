use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::{header::CONTENT_LENGTH, header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Guidance returned for any path that matches no route.
pub const ROUTE_NOT_FOUND_DETAIL: &str = "The requested endpoint does not exist. \
     Please refer to the API documentation at `/docs` or `/formats` for available endpoints and formats.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidFormatCode(TimeError),

    #[error(transparent)]
    UnknownTimezone(TimeError),

    #[error("{}", ROUTE_NOT_FOUND_DETAIL)]
    RouteNotFound,

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),
}

impl From<TimeError> for ApiError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::UnknownFormatCode { .. } => ApiError::InvalidFormatCode(e),
            TimeError::UnknownTimezone(_) => ApiError::UnknownTimezone(e),
        }
    }
}

/// Failures while resolving a format code or timezone.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error(
        "Invalid format_code '{code}'. Available formats: {}. Please consult /formats for details.",
        quoted_list(.available)
    )]
    UnknownFormatCode {
        code: String,
        available: Vec<&'static str>,
    },

    #[error(
        "Unknown timezone '{0}' specified. Please provide a valid IANA timezone. \
         Examples: 'UTC', 'America/New_York', 'Europe/London'. \
         Refer to https://en.wikipedia.org/wiki/List_of_tz_database_time_zones for a full list."
    )]
    UnknownTimezone(String),
}

/// Render codes as `['a', 'b']`.
fn quoted_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidFormatCode(_) | ApiError::UnknownTimezone(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Query(rejection) => rejection.status(),
            ApiError::Path(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Give bodiless framework errors (405 and friends) a `{detail}` JSON body.
///
/// Responses that already carry a content type are left alone, so handler
/// errors and the 404 guidance pass through unchanged. Other headers such as
/// `Allow` are kept.
pub async fn detail_envelope(response: Response) -> Response {
    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.headers().contains_key(CONTENT_TYPE) {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    let detail = status.canonical_reason().unwrap_or("Error");

    (parts, Json(json!({ "detail": detail }))).into_response()
}
