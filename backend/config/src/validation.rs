//! Config validation with path-qualified messages.

use thiserror::Error;

use crate::schema::ArmoniaConfig;

/// Levels `tracing` understands as a bare filter.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &ArmoniaConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_logging(config, &mut report);
    validate_prompts(config, &mut report);
    report
}

fn validate_logging(config: &ArmoniaConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            report.error(
                "logging.level",
                format!("Unknown log level '{level}'; expected one of {}", LOG_LEVELS.join(", ")),
            );
        }
    }
    if logging.directory.as_deref().is_some_and(|d| d.trim().is_empty()) {
        report.warn("logging.directory", "Empty directory; file logging is disabled");
    }
}

fn validate_prompts(config: &ArmoniaConfig, report: &mut ValidationReport) {
    let Some(prompts) = &config.prompts else { return };
    if prompts.template_dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
        report.warn(
            "prompts.templateDir",
            "Empty template directory; template paths resolve from the working directory",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{LoggingConfig, PromptsConfig};

    #[test]
    fn default_config_is_valid() {
        let report = validate(&ArmoniaConfig::default());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn unknown_level_is_an_error() {
        let cfg = ArmoniaConfig {
            logging: Some(LoggingConfig {
                level: Some("loud".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "logging.level");
    }

    #[test]
    fn level_check_ignores_case() {
        let cfg = ArmoniaConfig {
            logging: Some(LoggingConfig {
                level: Some("WARN".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(validate(&cfg).is_valid());
    }

    #[test]
    fn empty_paths_warn() {
        let cfg = ArmoniaConfig {
            logging: Some(LoggingConfig {
                directory: Some(" ".into()),
                ..Default::default()
            }),
            prompts: Some(PromptsConfig {
                template_dir: Some(String::new()),
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(report.is_valid());
        let paths: Vec<_> = report.warnings.iter().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["logging.directory", "prompts.templateDir"]);
    }
}
