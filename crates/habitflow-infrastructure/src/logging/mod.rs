//! Logging setup.
//!
//! Two sinks share one `tracing` registry:
//! - a daily-rolling file of one-line JSON records (always on)
//! - coloured human-readable stdout (debug builds only)
//!
//! `log` macros used anywhere in the process are forwarded into `tracing`.
//! `RUST_LOG` overrides the default filters.

mod format;

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use format::{HumanReadableFormatter, JsonLineFormatter};

const LOG_FILE_PREFIX: &str = "habitflow.log";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(log_dir: &Path) -> anyhow::Result<()> {
    if LOG_DIR.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(log_dir)?;

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .event_format(JsonLineFormatter::new(env!("CARGO_PKG_VERSION")))
        .with_filter(filter_or(if cfg!(debug_assertions) {
            "debug,habitflow=trace,sqlx=warn"
        } else {
            "info,sqlx=warn"
        }));

    let stdout_layer = cfg!(debug_assertions).then(|| {
        fmt::layer()
            .event_format(HumanReadableFormatter::new())
            .with_filter(filter_or("debug,sqlx=warn,hyper=info"))
    });

    let subscriber = Registry::default().with(file_layer).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = FILE_GUARD.set(guard);
    let _ = LOG_DIR.set(log_dir.to_path_buf());

    tracing::info!(
        target: "habitflow::logging",
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "debug" } else { "release" },
        "Logger initialized"
    );

    Ok(())
}

fn filter_or(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
