use config::{
    Config as RawConfig, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState,
};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FITVEG__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        let mut builder = Self::builder(&config_file_path)?.add_source(
            Environment::with_prefix("FITVEG")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Defaults and the file at `path`, ignoring the environment
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::builder(path)?.build()?.try_deserialize()
    }

    fn builder(path: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = RawConfig::builder()
            .set_default("database.url", "sqlite:fitveg.db")?
            .set_default("database.max_connections", 1)?
            .set_default("observability.log_level", default_log_level())?;

        // optional, a missing file keeps the defaults
        if std::path::Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path));
        }

        Ok(builder)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.trim().is_empty() {
            return Err("Database url must not be empty".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}
