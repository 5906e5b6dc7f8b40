mod models;

use std::{fs, path::Path, sync::OnceLock};

use tracing::debug;

pub use models::{
    DEFAULT_MAX_CPU, DEFAULT_MAX_RAM, DEFAULT_MIN_RAM, HardwareBounds, ProviderProperties,
};

use crate::hardware::HardwareError;

/// Single, module-private cache (set exactly once).
static PROPERTIES: OnceLock<ProviderProperties> = OnceLock::new();

/// Parse and validate properties without touching the process-wide cache.
pub fn parse_json_str(json: &str) -> Result<ProviderProperties, ConfigError> {
    let parsed: ProviderProperties = serde_json::from_str(json).map_err(ConfigError::Json)?;
    parsed.hardware.validate().map_err(ConfigError::Invalid)?;
    Ok(parsed)
}

/// Read and validate a properties file without touching the cache.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ProviderProperties, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading provider properties");
    let data = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_json_str(&data)
}

/// Initialize from a JSON file path.
pub fn init_from_file(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    publish(load_from_file(path)?)
}

/// Initialize from a JSON string.
pub fn init_from_json_str(json: &str) -> Result<(), ConfigError> {
    publish(parse_json_str(json)?)
}

fn publish(properties: ProviderProperties) -> Result<(), ConfigError> {
    PROPERTIES
        .set(properties)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Initialize from an env var containing JSON.
pub fn init_from_env(var: &str) -> Result<(), ConfigError> {
    let s = std::env::var(var).map_err(|_| ConfigError::MissingEnv(var.to_string()))?;
    init_from_json_str(&s)
}

pub fn properties() -> Result<&'static ProviderProperties, ConfigError> {
    PROPERTIES.get().ok_or(ConfigError::NotInitialized)
}

pub fn hardware_bounds() -> Result<HardwareBounds, ConfigError> {
    Ok(properties()?.hardware())
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("provider properties are not initialized")]
    NotInitialized,
    #[error("provider properties already initialized")]
    AlreadyInitialized,
    #[error("missing env var: {0}")]
    MissingEnv(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] HardwareError),
}
