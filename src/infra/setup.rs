use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::infra::config::AppConfig;

fn file_appender(log_path: &str, prefix: &str) -> RollingFileAppender {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("jsonl")
        .build(log_path)
        .expect("log directory must be writable")
}

fn non_blocking(appender: RollingFileAppender) -> (NonBlocking, WorkerGuard) {
    NonBlockingBuilder::default().lossy(false).finish(appender)
}

fn error_file_layer<S>(writer: NonBlocking) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_writer(writer)
        .with_filter(filter_fn(|metadata| metadata.level() == &tracing::Level::ERROR))
}

fn app_file_layer<S>(writer: NonBlocking) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer().json().with_writer(writer).with_filter(filter_fn(|metadata| {
        let level = metadata.level();
        level == &tracing::Level::INFO || level == &tracing::Level::WARN
    }))
}

fn console_layer<S>() -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer().with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
}

/// Errors and regular logs go to separate daily-rolling JSON files; the
/// console stream follows RUST_LOG. Keep the guards alive for the whole
/// process or buffered lines are lost on shutdown.
pub fn init_tracing(config: &AppConfig) -> (WorkerGuard, WorkerGuard) {
    let log_path = &config.logger.log_path;

    let (error_writer, error_guard) = non_blocking(file_appender(log_path, "error"));
    let (app_writer, app_guard) = non_blocking(file_appender(log_path, "app"));

    tracing_subscriber::registry()
        .with(error_file_layer(error_writer))
        .with(app_file_layer(app_writer))
        .with(console_layer())
        .init();

    (error_guard, app_guard)
}
