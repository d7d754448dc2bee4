//! Layered configuration for Stocked tools.
//!
//! Sources are merged in order, later ones winning:
//! `<dir>/default.toml`, `<dir>/<env>.toml`, then `STOCKED__SECTION__KEY`
//! environment variables (for example `STOCKED__INDICATORS__RSI__PERIOD=21`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use stocked_indicators::IndicatorSettings;
use tracing::debug;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "STOCKED";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub indicators: IndicatorSettings,
    pub data: DataConfig,
    pub log: LogConfig,
}

/// How price series are read from CSV input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Header of the column holding the date label.
    pub date_column: String,
    /// Header of the column holding the closing price.
    pub price_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            date_column: "date".to_string(),
            price_column: "price".to_string(),
        }
    }
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Renders the configuration as TOML, e.g. to seed a `default.toml`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize configuration")
    }
}

/// Loads configuration from `./config` for the given environment name.
pub fn load_config(env: Option<&str>) -> Result<AppConfig> {
    load_config_from(Path::new("config"), env)
}

/// Loads configuration rooted at `dir`. Missing files are skipped.
pub fn load_config_from(dir: &Path, env: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder().add_source(toml_source(dir.join("default.toml")));
    if let Some(env) = env.filter(|env| *env != "default") {
        builder = builder.add_source(toml_source(dir.join(format!("{env}.toml"))));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config: AppConfig = builder
        .build()
        .with_context(|| format!("failed to load configuration from {}", dir.display()))?
        .try_deserialize()
        .context("configuration has an unexpected shape")?;
    config
        .indicators
        .validate()
        .context("invalid indicator configuration")?;

    debug!(dir = %dir.display(), env = env.unwrap_or("default"), "configuration loaded");
    Ok(config)
}

fn toml_source(path: PathBuf) -> impl config::Source + Send + Sync + 'static {
    File::from(path).format(FileFormat::Toml).required(false)
}
