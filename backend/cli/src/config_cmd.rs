//! `armonia config`: show the effective configuration.

use std::path::Path;

use anyhow::{Context, Result};
use armonia_config::{collect_referenced_vars, load_config, ArmoniaConfig};

use crate::terminal_output::note_warn;

/// Print the loaded config, defaults applied, as YAML.
pub async fn run(config: &ArmoniaConfig, path: &Path) -> Result<()> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        note_warn(&format!("No config file at {}; showing defaults", path.display()));
    }
    print!("{}", to_yaml(config)?);
    Ok(())
}

/// Print the `${VAR}` names the raw config file refers to, one per line.
///
/// Works on the unprocessed file, so it also runs when a variable is unset.
pub async fn run_show_vars(path: &Path) -> Result<()> {
    let raw = load_config(path).await?;
    for name in referenced_vars(&raw)? {
        println!("{name}");
    }
    Ok(())
}

fn to_yaml(config: &ArmoniaConfig) -> Result<String> {
    serde_yaml::to_string(config).context("Failed to serialize config to YAML")
}

fn referenced_vars(raw: &ArmoniaConfig) -> Result<Vec<String>> {
    let value = serde_json::to_value(raw)?;
    Ok(collect_referenced_vars(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_vars_of_raw_config() {
        let raw = armonia_config::parse_config(
            "logging:\n  directory: ${LOG_DIR}\nprompts:\n  templateDir: ${PROMPTS}/v2\n",
        )
        .unwrap();
        assert_eq!(referenced_vars(&raw).unwrap(), vec!["LOG_DIR", "PROMPTS"]);
    }

    #[test]
    fn yaml_uses_camel_case_keys() {
        let config = armonia_config::apply_all_defaults(ArmoniaConfig::default());
        let yaml = to_yaml(&config).unwrap();
        assert!(yaml.contains("escapeHtml: false"));
        assert!(yaml.contains("level: info"));
    }
}
