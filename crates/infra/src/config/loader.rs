//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If a backend URL variable is missing, falls back to loading from file;
//!    an invalid value in a complete environment is an error
//! 3. Searches multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With neither, uses the built-in defaults (local development backends)
//!
//! ## Environment Variables
//! - `CARGAS_NIKE_API_URL`: Base URL of the auth-provider backend (required)
//! - `CARGAS_CENTAURO_API_URL`: Base URL of the second backend (required)
//! - `CARGAS_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `CARGAS_USER_AGENT`: User agent sent with every request
//! - `CARGAS_SESSION_PATH`: Session state file
//!
//! ## File Locations
//! The loader checks the following paths (in order):
//! 1. `./cargas.toml` or `./cargas.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use cargas_domain::{
    AppConfig, CargasError, HttpSettings, IntegrationEndpoints, Result, SessionSettings,
};

const CONFIG_FILE_NAMES: [&str; 4] = ["cargas.toml", "cargas.json", "config.toml", "config.json"];

/// Variables whose presence selects the environment as the config source.
const REQUIRED_ENV_VARS: [&str; 2] = ["CARGAS_NIKE_API_URL", "CARGAS_CENTAURO_API_URL"];

/// Load configuration with automatic fallback strategy
///
/// Environment first when both backend URLs are set, then the first config
/// file found, then defaults.
///
/// # Errors
/// Returns `CargasError::Config` if both backend URLs are set but the
/// environment holds an invalid value, or a config file exists but cannot be
/// parsed.
pub fn load() -> Result<AppConfig> {
    match REQUIRED_ENV_VARS.iter().find(|key| std::env::var(key).is_err()) {
        None => {
            let config = load_from_env()?;
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Some(missing) => {
            tracing::debug!(missing, "Environment configuration incomplete, trying file");
        }
    }

    match find_config_file() {
        Some(path) => load_from_file(&path),
        None => {
            tracing::info!("No configuration found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Both backend URLs must be present; the remaining variables are optional.
///
/// # Errors
/// Returns `CargasError::Config` if a required variable is missing or a
/// value is invalid.
pub fn load_from_env() -> Result<AppConfig> {
    let nike_api_url = env_var("CARGAS_NIKE_API_URL")?;
    let centauro_api_url = env_var("CARGAS_CENTAURO_API_URL")?;
    validate_url("CARGAS_NIKE_API_URL", &nike_api_url)?;
    validate_url("CARGAS_CENTAURO_API_URL", &centauro_api_url)?;

    let mut http = HttpSettings::default();
    if let Ok(raw) = std::env::var("CARGAS_HTTP_TIMEOUT_SECS") {
        http.timeout_secs = raw
            .parse::<u64>()
            .map_err(|e| CargasError::Config(format!("Invalid HTTP timeout: {e}")))?;
    }
    http.user_agent = std::env::var("CARGAS_USER_AGENT").ok().filter(|agent| !agent.is_empty());

    let mut session = SessionSettings::default();
    if let Ok(path) = std::env::var("CARGAS_SESSION_PATH") {
        session.storage_path = path;
    }

    Ok(AppConfig {
        integrations: IntegrationEndpoints { nike_api_url, centauro_api_url },
        http,
        session,
    })
}

/// Load configuration from a file
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `CargasError::Config` if the file is missing, unreadable, in an
/// unsupported format, or holds an invalid URL.
pub fn load_from_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(CargasError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| CargasError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, path)?;
    validate_url("nike_api_url", &config.integrations.nike_api_url)?;
    validate_url("centauro_api_url", &config.integrations.centauro_api_url)?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CargasError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CargasError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CargasError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Search the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    first_existing_in(&dirs)
}

fn first_existing_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| CargasError::Config(format!("Missing required environment variable: {key}")))
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| CargasError::Config(format!("Invalid URL in {name}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CargasError::Config(format!("Unsupported URL scheme in {name}: {other}"))),
    }
}
