use anyhow::Context;
use serde::Deserialize;
use std::{
    collections::HashMap,
    path::{
        Path,
        PathBuf,
    },
};
use tracing_subscriber::EnvFilter;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_clear_cache_between_games() -> bool {
    true
}

#[derive(Deserialize, Debug)]
pub struct Config {
    /// An `EnvFilter` directive, like `info` or `minimax=debug`.
    #[serde(default = "default_log_level")]
    log_level: String,

    /// Also log to this file, if set.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// The # of action values to make room for up front.
    #[serde(default)]
    cache_capacity: usize,

    /// Whether each board given to a command starts with an empty cache.
    #[serde(default = "default_clear_cache_between_games")]
    clear_cache_between_games: bool,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    pub fn clear_cache_between_games(&self) -> bool {
        self.clear_cache_between_games
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        std::fs::read(path)
            .with_context(|| format!("Failed to read config from '{}'", path.display()))
            .and_then(|b| Self::load_from_bytes(&b))
    }

    /// Load a config from bytes
    pub fn load_from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes).context("Config is not valid utf8")?;
        toml::from_str(text).context("Failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if EnvFilter::try_new(&self.log_level).is_err() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogLevel(self.log_level.clone()),
            });
        }

        if let Some(path) = &self.log_file {
            if path.file_name().is_none() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidLogFile(path.clone()),
                });
            }
        }

        let mut unknown_keys: Vec<_> = self.extra.keys().cloned().collect();
        unknown_keys.sort();
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            cache_capacity: 0,
            clear_cache_between_games: default_clear_cache_between_games(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid Log Level '{0}'")]
    InvalidLogLevel(String),

    #[error("Invalid Log File '{}'", .0.display())]
    InvalidLogFile(PathBuf),

    #[error("Unknown Key '{0}'")]
    UnknownKey(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::load_from_bytes(b"").expect("failed to parse");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.log_file(), None);
        assert_eq!(config.cache_capacity(), 0);
        assert!(config.clear_cache_between_games());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn full_config() {
        let config = Config::load_from_bytes(
            br#"
log_level = "minimax=debug,info"
log_file = "logs/solver.log"
cache_capacity = 32768
clear_cache_between_games = false
"#,
        )
        .expect("failed to parse");

        assert_eq!(config.log_level(), "minimax=debug,info");
        assert_eq!(config.log_file(), Some(Path::new("logs/solver.log")));
        assert_eq!(config.cache_capacity(), 32_768);
        assert!(!config.clear_cache_between_games());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn validation_messages() {
        let config = Config::load_from_bytes(
            br#"
log_level = "minimax=notalevel"
board_size = 4
"#,
        )
        .expect("failed to parse");

        let messages = config.validate();
        assert_eq!(messages.len(), 2);

        assert_eq!(messages[0].severity(), Severity::Error);
        assert!(matches!(
            messages[0].error(),
            ValidationError::InvalidLogLevel(_)
        ));

        assert_eq!(messages[1].severity(), Severity::Warn);
        assert!(matches!(
            messages[1].error(),
            ValidationError::UnknownKey(key) if key == "board_size"
        ));
    }

    #[test]
    fn bad_types_fail_to_parse() {
        assert!(Config::load_from_bytes(b"cache_capacity = \"lots\"").is_err());
    }
}
