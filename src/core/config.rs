//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.songvocab/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::controller::OverlapPolicy;
use crate::core::render::ContentPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SongVocabConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    pub content_policy: Option<ContentPolicy>,
    pub overlap: Option<OverlapPolicy>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ENDPOINT: &str = "/api/agent";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub endpoint: String,
    pub content_policy: ContentPolicy,
    pub overlap: OverlapPolicy,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub content_policy: Option<ContentPolicy>,
    pub overlap: Option<OverlapPolicy>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.songvocab/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".songvocab").join("config.toml"))
}

/// Load config from `~/.songvocab/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SongVocabConfig::default()`.
pub fn load_config() -> Result<SongVocabConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(SongVocabConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SongVocabConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<SongVocabConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SongVocabConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# SongVocab Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# base_url = "http://localhost:8000"   # Or set SONGVOCAB_BASE_URL
# endpoint = "/api/agent"              # Or set SONGVOCAB_ENDPOINT

# [render]
# content_policy = "escaped"           # "escaped" or "trusted"
# overlap = "latest_wins"              # "latest_wins" or "race"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SongVocabConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env(
    config: &SongVocabConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("SONGVOCAB_BASE_URL"))
        .or_else(|| config.service.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Endpoint: env → config → default
    let endpoint = env("SONGVOCAB_ENDPOINT")
        .or_else(|| config.service.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    ResolvedConfig {
        base_url,
        endpoint,
        content_policy: cli
            .content_policy
            .or(config.render.content_policy)
            .unwrap_or_default(),
        overlap: cli.overlap.or(config.render.overlap).unwrap_or_default(),
    }
}
