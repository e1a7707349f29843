pub mod formats;
pub mod health;
pub mod not_found;
pub mod root;
pub mod time;

use utoipa::OpenApi;

pub use formats::{handle_formats, FormatsResponse, __path_handle_formats};
pub use health::{handle_health, HealthResponse, __path_handle_health};
pub use not_found::handle_not_found;
pub use root::{handle_root, RootResponse, ROOT_MESSAGE, __path_handle_root};
pub use time::{
    handle_format_time, FormatTimeParams, FormatTimeResponse, __path_handle_format_time,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Automate All The Things API",
        description = "Returns the current UTC time and the static message 'Automate All The Things'.\n\n\
            For a list of supported time formats, call `/formats`.\n\n\
            Timezones should be valid IANA timezone strings (e.g., 'America/New_York').",
        version = "1.0.0",
        license(name = "MIT")
    ),
    paths(
        handle_root,
        handle_format_time,
        handle_formats,
        handle_health,
    ),
    components(schemas(
        RootResponse,
        FormatTimeResponse,
        FormatsResponse,
        HealthResponse,
    )),
    tags(
        (name = "Core", description = "Current time in fixed formats"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
