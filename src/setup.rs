use crate::config::{
    Config,
    Severity,
};
use anyhow::{
    ensure,
    Context,
};
use std::path::Path;

/// The config path used when none is given
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

/// Load a config.
///
/// This prints to the stderr directly.
/// It is intended to be called BEFORE the loggers are set up.
///
/// If no path is given, `./config.toml` is used if it exists.
/// Otherwise, the defaults are used.
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if !default_path.exists() {
                eprintln!("no config found, using defaults");
                return Ok(Config::default());
            }
            default_path
        }
    };

    eprintln!("loading `{}`...", path.display());
    let config = Config::load_from_path(path)
        .with_context(|| format!("failed to load `{}`", path.display()))?;

    eprintln!("validating config...");
    let errors = config.validate();
    let mut error_count = 0;
    for e in errors {
        match e.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", e.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", e.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "validation failed with {error_count} errors."
    );

    Ok(config)
}
