use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Unknown rotation names fall back to a single file.
fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

/// Default filter: configured level for this crate, quieter HTTP/SQL internals.
fn default_filter(log_level: &str) -> String {
    format!("{log_level},hyper=warn,sqlx=warn,reqwest=warn")
}

/// Install the global subscriber. The returned guard must live until shutdown.
///
/// JSON mode writes only to the file and carries the current span, so every
/// purchase line has its `request_id`. Text mode also mirrors to stdout.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let appender =
        RollingFileAppender::new(rotation(&config.rotation), &config.log_dir, &config.log_file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let (json_file, text_file, stdout) = if config.use_json {
        let json_file = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(writer)
            .with_ansi(false);
        (Some(json_file), None, None)
    } else {
        let text_file = fmt::layer()
            .with_target(false)
            .with_writer(writer)
            .with_ansi(false);
        let stdout = fmt::layer().with_target(false);
        (None, Some(text_file), Some(stdout))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_file)
        .with(text_file)
        .with(stdout)
        .init();

    guard
}
