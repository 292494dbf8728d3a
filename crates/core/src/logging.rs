use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where and how much an embedding process logs.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// File prefix of the daily log files
    pub component: String,
    /// Defaults to `~/.pkgscope/logs`
    pub dir: Option<PathBuf>,
    pub level: String,
    /// Mirror events to stderr with colors
    pub stderr: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            component: "pkgscope".to_string(),
            dir: None,
            level: "info".to_string(),
            stderr: false,
        }
    }
}

impl LogSettings {
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_log_dir)
    }
}

pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pkgscope/logs")
}

/// Installs the global subscriber and returns the file writer's guard.
///
/// Dropping the guard flushes pending lines. An already installed subscriber
/// is kept.
pub fn init_logging(settings: &LogSettings) -> WorkerGuard {
    let (writer, guard) = daily_writer(&settings.log_dir(), &settings.component);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let stderr_layer = settings.stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(stderr_layer)
        .try_init();

    guard
}

fn daily_writer(dir: &Path, component: &str) -> (NonBlocking, WorkerGuard) {
    let _ = std::fs::create_dir_all(dir);
    tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, component))
}
