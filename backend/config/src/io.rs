//! Locating and reading the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{debug, info};

use crate::schema::ArmoniaConfig;

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the Armonia config directory.
/// Priority: `ARMONIA_CONFIG_DIR` env > `~/.armonia/` > `./.armonia/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ARMONIA_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".armonia"),
        None => PathBuf::from(".armonia"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<ArmoniaConfig> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(ArmoniaConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Parse config YAML. An empty document is an empty config.
pub fn parse_config(raw: &str) -> Result<ArmoniaConfig> {
    if raw.trim().is_empty() {
        return Ok(ArmoniaConfig::default());
    }
    Ok(serde_yaml::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("nope.yaml")).await.unwrap();
        assert_eq!(cfg, ArmoniaConfig::default());
    }

    #[tokio::test]
    async fn reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        std::fs::write(&path, "logging:\n  level: debug\n").unwrap();
        let cfg = load_config(&path).await.unwrap();
        assert_eq!(cfg.log_level(), "debug");
    }

    #[tokio::test]
    async fn bad_yaml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "render: [unclosed").unwrap();
        let err = load_config(&path).await.unwrap_err();
        assert!(format!("{err:#}").contains("config.yaml"));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("  \n").unwrap(), ArmoniaConfig::default());
    }

    #[test]
    fn file_name_is_config_yaml() {
        assert_eq!(
            config_file_path(Path::new("/etc/armonia")),
            PathBuf::from("/etc/armonia/config.yaml")
        );
    }
}
