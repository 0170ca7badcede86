//! Config defaults: fills the values the runtime needs when the file omits them.

use crate::schema::{ArmoniaConfig, LoggingConfig, RenderConfig};

/// Default tracing level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File logs are NDJSON unless turned off.
pub const DEFAULT_LOG_JSON: bool = true;

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: ArmoniaConfig) -> ArmoniaConfig {
    let config = apply_render_defaults(config);
    apply_logging_defaults(config)
}

/// Raw HTML passes through unless escaping is asked for.
fn apply_render_defaults(mut config: ArmoniaConfig) -> ArmoniaConfig {
    let render = config.render.get_or_insert_with(RenderConfig::default);
    if render.escape_html.is_none() {
        render.escape_html = Some(false);
    }
    config
}

fn apply_logging_defaults(mut config: ArmoniaConfig) -> ArmoniaConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.json.is_none() {
        logging.json = Some(DEFAULT_LOG_JSON);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_empty_config() {
        let cfg = apply_all_defaults(ArmoniaConfig::default());
        assert_eq!(cfg.render.unwrap().escape_html, Some(false));
        let logging = cfg.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.json, Some(true));
        assert_eq!(logging.directory, None);
    }

    #[test]
    fn does_not_override_user_values() {
        let cfg = ArmoniaConfig {
            render: Some(RenderConfig {
                escape_html: Some(true),
            }),
            logging: Some(LoggingConfig {
                level: Some("debug".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let cfg = apply_all_defaults(cfg);
        assert!(cfg.escape_html());
        assert_eq!(cfg.log_level(), "debug");
    }
}
