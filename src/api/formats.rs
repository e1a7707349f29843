use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde::{Serialize, Serializer};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::TimeFormatter;

/// Response from the /formats endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct FormatsResponse {
    /// Format code mapped to an example rendered from the current UTC time
    #[serde(serialize_with = "serialize_in_order")]
    #[schema(value_type = Object)]
    pub available_formats: Vec<(String, String)>,
}

/// Emit pairs as a JSON object, keeping their order.
fn serialize_in_order<S: Serializer>(
    entries: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(code, example)| (code, example)))
}

/// List all available formats
///
/// Returns every format code along with an example using the current UTC time.
/// Use these codes with /format_time/{format_code}.
#[utoipa::path(
    get,
    path = "/formats",
    responses(
        (status = 200, description = "Available format codes with live examples", body = FormatsResponse),
    ),
    tag = "Core"
)]
pub async fn handle_formats(State(formatter): State<Arc<TimeFormatter>>) -> impl IntoResponse {
    let available_formats = formatter
        .examples()
        .into_iter()
        .map(|(code, example)| (code.to_string(), example))
        .collect();

    Json(FormatsResponse { available_formats })
}
