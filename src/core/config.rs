//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.parley/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub server_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.parley/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".parley").join("config.toml"))
}

/// Load config from `~/.parley/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ParleyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ParleyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ParleyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ParleyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ParleyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Parley Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# url = "http://localhost:8000"      # Or set PARLEY_SERVER_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_server` comes from the `--server` flag (None = not specified).
pub fn resolve(config: &ParleyConfig, cli_server: Option<&str>) -> ResolvedConfig {
    let server_url = cli_server
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PARLEY_SERVER_URL").ok())
        .or_else(|| config.server.url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    ResolvedConfig { server_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ParleyConfig::default();
        assert!(config.server.url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ParleyConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_resolve_config_value_overrides_default() {
        let config = ParleyConfig {
            server: ServerConfig {
                url: Some("http://chat.internal:9000".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.server_url, "http://chat.internal:9000");
    }

    #[test]
    fn test_resolve_cli_server_wins() {
        let config = ParleyConfig {
            server: ServerConfig {
                url: Some("http://from-file:8000".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://from-cli:8000"));
        assert_eq!(resolved.server_url, "http://from-cli:8000");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[server]
url = "http://example.com"
"#;
        let config: ParleyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.url.as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: ParleyConfig = toml::from_str("").unwrap();
        assert!(config.server.url.is_none());
    }
}
