use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::TimeFormatter;

/// Static message returned by the root endpoint
pub const ROOT_MESSAGE: &str = "Automate All The Things";

/// Response from the / endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Always "Automate All The Things"
    pub message: String,
    /// Current UTC time in ISO8601
    pub current_time: String,
}

/// Get the current UTC time and the static message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static message and current UTC time", body = RootResponse),
    ),
    tag = "Core"
)]
pub async fn handle_root(
    State(formatter): State<Arc<TimeFormatter>>,
) -> Result<impl IntoResponse, ApiError> {
    let current_time = formatter.default_now()?;

    Ok(Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
        current_time,
    }))
}
