//! XML configuration support.
//! - Loads logging settings from config.xml (quick_xml + serde).
//! - A missing default file means defaults; an explicit `$PHOTO_RENAME_CONFIG`
//!   that cannot be read is an error.
//!
//! Unknown XML fields are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::CONFIG_ENV;
use super::paths::default_config_path;
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "json")]
    json: Option<bool>,
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.trim().parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    cfg.json = parsed.json.unwrap_or(false);

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Resolve and load the effective config file.
///
/// - `$PHOTO_RENAME_CONFIG` set: that file must load.
/// - Otherwise the default location is used if it exists; else defaults.
pub fn load_config() -> Result<Config> {
    let explicit = env::var_os(CONFIG_ENV).is_some();
    let path = match default_config_path() {
        Ok(p) => p,
        Err(e) => {
            debug!(error = %e, "no config location; using defaults");
            return Ok(Config::default());
        }
    };

    if !explicit && !path.exists() {
        return Ok(Config::default());
    }
    load_config_from_xml_path(&path)
}
