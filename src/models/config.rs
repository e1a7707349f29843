use serde::Deserialize;
use std::path::Path;

/// Server configuration loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Serve Swagger UI at /docs and the OpenAPI document at /openapi.json
    #[serde(default = "default_docs")]
    pub docs: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_docs() -> bool {
    true
}

impl ServerConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        bind_addr = %config.bind_addr,
                        docs = config.docs,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `CONFIG_FILE`, then apply the `BIND_ADDR` override
    pub fn from_env() -> Self {
        let config_file = std::env::var("CONFIG_FILE").ok();
        let config = Self::load(config_file.as_deref().map(Path::new));
        config.with_bind_override(std::env::var("BIND_ADDR").ok())
    }

    fn with_bind_override(mut self, bind_addr: Option<String>) -> Self {
        if let Some(addr) = bind_addr.filter(|a| !a.is_empty()) {
            self.bind_addr = addr;
        }
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            docs: default_docs(),
        }
    }
}
