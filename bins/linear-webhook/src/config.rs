//! Configuration file loading
//!
//! Settings come from an optional TOML file. Command-line flags and the
//! `LINEAR_WEBHOOK_SECRET` environment variable take precedence over it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub verifier: VerifierConfig,
}

/// Verifier settings
#[derive(Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Shared webhook secret
    #[serde(default)]
    pub secret: Option<String>,

    /// Freshness window in milliseconds
    #[serde(default = "default_tolerance_ms")]
    pub tolerance_ms: u64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            secret: None,
            tolerance_ms: default_tolerance_ms(),
        }
    }
}

impl fmt::Debug for VerifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierConfig")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("tolerance_ms", &self.tolerance_ms)
            .finish()
    }
}

fn default_tolerance_ms() -> u64 {
    u64::try_from(linear_webhooks::DEFAULT_TOLERANCE.as_millis()).unwrap_or(u64::MAX)
}

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path, a standard location, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        ".linear-webhook.toml",
        "linear-webhook.toml",
        ".config/linear-webhook.toml",
    ];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
