//! `${VAR}` substitution in config string values.
//!
//! Only uppercase `[A-Z_][A-Z0-9_]*` names are recognised. `$${VAR}` is an
//! escape and becomes the literal text `${VAR}`.

use std::collections::HashMap;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

/// Matches `${VAR}` and its escaped form `$${VAR}`.
static VAR_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\$?)\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// A referenced variable is unset or empty.
#[derive(Debug, thiserror::Error)]
#[error("Missing env var \"{var_name}\" referenced at config path: {config_path}")]
pub struct MissingEnvVarError {
    pub var_name: String,
    pub config_path: String,
}

/// Substitute `${VAR}` references from the given map.
pub fn resolve_env_vars_with(value: &Value, env: &HashMap<String, String>) -> Result<Value> {
    Ok(substitute_value(value, env, "")?)
}

fn substitute_value(
    value: &Value,
    env: &HashMap<String, String>,
    path: &str,
) -> Result<Value, MissingEnvVarError> {
    match value {
        Value::String(s) => substitute_string(s, env, path).map(Value::String),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| substitute_value(item, env, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, item) in map {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                out.insert(key.clone(), substitute_value(item, env, &child)?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}

fn substitute_string(
    s: &str,
    env: &HashMap<String, String>,
    path: &str,
) -> Result<String, MissingEnvVarError> {
    if !s.contains('$') {
        return Ok(s.to_string());
    }

    let mut missing = None;
    let substituted = VAR_REFERENCE.replace_all(s, |caps: &Captures| {
        let name = &caps[2];
        if !caps[1].is_empty() {
            return format!("${{{name}}}");
        }
        match env.get(name) {
            Some(val) if !val.is_empty() => val.clone(),
            _ => {
                missing.get_or_insert_with(|| MissingEnvVarError {
                    var_name: name.to_string(),
                    config_path: path.to_string(),
                });
                String::new()
            }
        }
    });

    match missing {
        Some(err) => Err(err),
        None => Ok(substituted.into_owned()),
    }
}

/// Names of all variables referenced in a value tree, sorted and deduplicated.
pub fn collect_referenced_vars(value: &Value) -> Vec<String> {
    let mut vars = Vec::new();
    collect_into(value, &mut vars);
    vars.sort();
    vars.dedup();
    vars
}

fn collect_into(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.extend(
            VAR_REFERENCE
                .captures_iter(s)
                .filter(|caps| caps[1].is_empty())
                .map(|caps| caps[2].to_string()),
        ),
        Value::Array(items) => items.iter().for_each(|item| collect_into(item, out)),
        Value::Object(map) => map.values().for_each(|item| collect_into(item, out)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_nested_values() {
        let v = json!({"logging": {"directory": "${LOG_ROOT}/armonia"}});
        let result = resolve_env_vars_with(&v, &env(&[("LOG_ROOT", "/var/log")])).unwrap();
        assert_eq!(result["logging"]["directory"], "/var/log/armonia");
    }

    #[test]
    fn missing_var_names_path() {
        let v = json!({"prompts": {"templateDir": "${PROMPT_DIR}"}});
        let err = resolve_env_vars_with(&v, &HashMap::new()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("PROMPT_DIR"));
        assert!(msg.contains("prompts.templateDir"));
    }

    #[test]
    fn empty_var_counts_as_missing() {
        let v = json!(["${EMPTY}"]);
        assert!(resolve_env_vars_with(&v, &env(&[("EMPTY", "")])).is_err());
    }

    #[test]
    fn escaped_reference_is_literal() {
        let v = json!({"x": "$${HOME_DIR} and ${A}"});
        let result = resolve_env_vars_with(&v, &env(&[("A", "1")])).unwrap();
        assert_eq!(result["x"], "${HOME_DIR} and 1");
    }

    #[test]
    fn lowercase_names_are_ignored() {
        let v = json!({"x": "${lower}", "n": 3, "b": true});
        let result = resolve_env_vars_with(&v, &HashMap::new()).unwrap();
        assert_eq!(result, v);
    }

    #[test]
    fn collects_unescaped_references() {
        let v = json!({"a": "${B} ${A}", "b": ["${A}", "$${C}"]});
        assert_eq!(collect_referenced_vars(&v), vec!["A", "B"]);
    }
}
