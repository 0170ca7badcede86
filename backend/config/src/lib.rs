//! `armonia-config` — Armonia configuration management.
//!
//! Provides:
//! - Typed config schema (render, logging, prompts)
//! - YAML loading from the config directory
//! - `${ENV_VAR}` substitution
//! - Default value application
//! - Validation with path-qualified errors and warnings

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{collect_referenced_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, parse_config};
pub use schema::{ArmoniaConfig, LoggingConfig, PromptsConfig, RenderConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Load, substitute env vars, apply defaults to, and validate a config file.
///
/// This is the main entry point for loading a config at runtime. Validation
/// errors fail the load. Warnings do not; callers report them from
/// [`validate`] once logging is up.
pub async fn load_and_prepare(path: &Path) -> Result<ArmoniaConfig> {
    let raw = load_config(path).await?;
    let env: HashMap<String, String> = std::env::vars().collect();
    prepare(raw, &env)
}

/// The processing half of [`load_and_prepare`], with an explicit environment.
pub fn prepare(raw: ArmoniaConfig, env: &HashMap<String, String>) -> Result<ArmoniaConfig> {
    let value = serde_json::to_value(&raw).context("Failed to serialize config for processing")?;
    let value = resolve_env_vars_with(&value, env).context("Failed to resolve env vars in config")?;

    let config: ArmoniaConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;
    let config = apply_all_defaults(config);

    let report = validate(&config);
    if !report.is_valid() {
        let messages: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }

    Ok(config)
}
