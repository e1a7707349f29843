use axum::response::{IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Response from the /healthz endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,
}

/// Health check endpoint
///
/// Verifies that the service is running.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn handle_health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
