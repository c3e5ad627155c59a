//! Shell configuration
//!
//! Layered with figment: built-in defaults, then an optional config file
//! (format picked by extension), then `RPN15_` environment variables. Nested
//! keys use `__`, e.g. `RPN15_ENGINE__UNARY_POLICY=drain`.

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use rpn_calc::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RPN15_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Log filter used when `--verbose` is not given
    pub log_level: String,
    /// Colored display output
    pub color: bool,
    /// REPL history file; no history is kept when unset
    pub history_file: Option<PathBuf>,
    pub engine: EngineConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
            history_file: None,
            engine: EngineConfig::default(),
        }
    }
}

/// Load configuration from defaults, an optional file and the environment
pub fn load(path: Option<&Path>) -> Result<ShellConfig> {
    let mut figment = Figment::from(Serialized::defaults(ShellConfig::default()));

    if let Some(path) = path {
        figment = merge_file(figment, path)?;
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: ShellConfig = figment
        .extract()
        .context("Failed to load rpn15 configuration")?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let figment = match extension {
        "json" => figment.merge(Json::file(path)),
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        other => bail!(
            "Unsupported config format '{}' for {} (use toml, yaml or json)",
            other,
            path.display()
        ),
    };
    Ok(figment)
}
