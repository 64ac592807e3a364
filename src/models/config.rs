use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Default log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Loads settings from an optional YAML file overlaid with `APP_*` environment variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "catalog.db")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults_without_a_file() {
        let config = ServerConfig::load("does-not-exist").unwrap();
        assert!(!config.database_url.is_empty());
        assert!(!config.log_level.is_empty());
    }
}
