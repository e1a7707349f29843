pub mod config;
pub mod format_spec;

pub use config::ServerConfig;
pub use format_spec::{FormatRegistry, FormatSpec, BUILTIN_FORMATS, DEFAULT_FORMAT};
