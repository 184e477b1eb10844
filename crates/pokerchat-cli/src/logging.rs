use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Keeps the stderr writer flushing until dropped at the end of `main`.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Install a stderr subscriber; `RUST_LOG` overrides the configured level.
pub fn init_logging(logging: &LoggingConfig) -> LoggingGuard {
    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(std::io::stderr());

    let level = logging.level().unwrap_or(Level::WARN);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer);

    // A subscriber installed earlier in the process stays in place.
    if logging.enable_structured {
        let subscriber = builder.json().with_current_span(false).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = builder.with_ansi(false).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    LoggingGuard { _guard: guard }
}
