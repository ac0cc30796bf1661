use crate::config::Config;
use anyhow::Context;
use std::path::Path;
use tracing_appender::{
    non_blocking::{
        NonBlocking,
        WorkerGuard,
    },
    rolling::{
        RollingFileAppender,
        Rotation,
    },
};
use tracing_subscriber::{
    layer::SubscriberExt,
    EnvFilter,
};

/// Make the filter, preferring `RUST_LOG` over the config.
fn make_env_filter(config: &Config) -> anyhow::Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => {
            EnvFilter::try_new(&directives).context("invalid `RUST_LOG` directives")
        }
        _ => EnvFilter::try_new(config.log_level()).context("invalid log level"),
    }
}

/// Open the log file for appending, behind a non-blocking writer.
fn make_file_writer(log_file: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let log_file_dir = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_file_name = log_file
        .file_name()
        .context("log file path is missing a file name")?
        .to_str()
        .context("log file name is not valid unicode")?;

    std::fs::create_dir_all(log_file_dir).context("failed to create log file dir")?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_file_name)
        .build(log_file_dir)
        .with_context(|| format!("failed to open log file `{}`", log_file.display()))?;

    Ok(tracing_appender::non_blocking(file_appender))
}

/// Try to setup a logger.
///
/// Logs go to the stderr, and to the log file if one is configured.
/// The returned guard must be held until shutdown, or file logs may be lost.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = make_env_filter(config)?;
    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log_file() {
        Some(log_file) => {
            let (file_writer, worker_guard) = make_file_writer(log_file)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer);

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn directory_log_file_is_an_error() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
        assert!(dir.is_dir());
        assert!(make_file_writer(&dir).is_err());
    }

    #[test]
    fn directory_log_file_fails_setup() {
        let toml = format!(
            "log_file = '{}'",
            Path::new(env!("CARGO_MANIFEST_DIR")).join("src").display()
        );
        let config = Config::load_from_bytes(toml.as_bytes()).expect("failed to parse config");

        // The file layer is built before the subscriber is installed.
        assert!(setup(&config).is_err());
    }

    #[test]
    fn log_file_is_created() {
        let log_file = std::env::temp_dir()
            .join(format!("tic-tac-toe-solver-{}", std::process::id()))
            .join("solver.log");

        let (_writer, guard) = make_file_writer(&log_file).expect("failed to open log file");
        drop(guard);

        assert!(log_file.is_file());
        std::fs::remove_dir_all(log_file.parent().expect("missing parent"))
            .expect("failed to clean up");
    }
}
