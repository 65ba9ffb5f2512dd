// Configuration loading and parsing (props.toml): odds model and report
// defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// Odds model
// ---------------------------------------------------------------------------

/// The odds assumptions behind edge and expected-value calculations.
///
/// The defaults reproduce the classic -110 American price: a 50% break-even
/// hit rate and 0.91 units returned per unit staked on a win. Both knobs are
/// configuration so an alternate odds model can be substituted without
/// touching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OddsModel {
    /// Assumed break-even hit rate, in percentage points.
    pub baseline_hit_pct: f64,
    /// Units won per unit staked when the bet hits.
    pub win_payout: f64,
}

impl Default for OddsModel {
    fn default() -> Self {
        OddsModel {
            baseline_hit_pct: 50.0,
            win_payout: 0.91,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Assembled configuration. Every field has a built-in default, so an
/// absent or partial props.toml is fine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub odds: OddsModel,
    pub report: ReportConfig,
}

/// Defaults applied when the CLI doesn't specify a value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default analysis window, in the feed spelling (e.g. "Last 20").
    pub period: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            period: "Last 20".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Default config path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "props.toml";

/// Load configuration.
///
/// With an explicit path, the file must exist and parse. With no path, a
/// `props.toml` in the working directory is used when present; otherwise
/// built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_from(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_from(default_path)
            } else {
                info!("no props.toml found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }
}

fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
