use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths that match no route
pub async fn handle_not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::RouteNotFound
}
