//! Tracing subscriber setup for the binary.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// Timestamp format for log lines.
struct GlossaTimer;

impl tracing_subscriber::fmt::time::FormatTime for GlossaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.format("%Y-%m-%d-T %H:%M:%S"))
    }
}

/// Keeps the non-blocking writer flushing until process exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `logs_dir`: Directory for `glossa.log`
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Logs go to `logs_dir/glossa.log` through a non-blocking writer
/// - Falls back to stderr when the log file cannot be opened
pub fn init(logs_dir: &Path, level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = logs_dir.join("glossa.log");
    let opened = std::fs::create_dir_all(logs_dir).and_then(|()| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });

    match opened {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(GlossaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(GlossaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[cfg(test)]
mod tests {
    /// What: `FormatTime` impl writes a non-empty timestamp without panicking
    #[test]
    fn glossa_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::GlossaTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
