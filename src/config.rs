use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError, ValidationErrors};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_DATA_DIR: &str = ".";
const DEFAULT_NAMESPACE: &str = "comex-data";
const CONFIG_DIR: &str = "config";

/// Desk configuration with validation.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DeskConfig {
    /// Directory holding the snapshot slot
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Name of the snapshot slot inside the data directory
    #[validate(length(min = 1))]
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[validate(custom = "validate_log_level")]
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            namespace: default_namespace(),
            log_level: default_log_level(),
            environment: default_environment(),
        }
    }
}

impl DeskConfig {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

#[derive(Debug, Error)]
pub enum DeskConfigError {
    #[error("Configuration load error: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Loads configuration from built-in defaults, optional files under
/// `config/`, and `COMEX__`-prefixed environment variables, in that
/// precedence order.
pub fn load_config() -> Result<DeskConfig, DeskConfigError> {
    // Support both RUN_ENV and COMEX_ENV for selecting the config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("COMEX_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("data_dir", DEFAULT_DATA_DIR)?
        .set_default("namespace", DEFAULT_NAMESPACE)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("environment", DEFAULT_ENV)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("COMEX").separator("__"))
        .build()?;

    let desk_config: DeskConfig = config.try_deserialize()?;

    desk_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        DeskConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(desk_config)
}

/// Initializes the tracing subscriber. An explicit `RUST_LOG` takes
/// precedence over the configured level.
pub fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let default_directive = format!("comex_desk={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive))
        .try_init();
}
