pub mod config;
pub mod middleware;
pub mod paths;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::error::{ChickenError, Result};

pub use config::{LogConfig, LogFormat};
pub use middleware::{access_log_middleware, request_id_middleware, RequestId};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize console logging, plus a JSON access log file when configured
///
/// The access log is rotated daily and only receives events with target
/// `access_log`. The returned guard must be held for as long as the file
/// should keep receiving writes.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let console_filter = EnvFilter::try_new(&config.console_log_level)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_CONSOLE_LOG_LEVEL));

    let console_layer: BoxedLayer = match config.format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact()
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_filter(console_filter)
            .boxed(),
    };

    let mut layers = vec![console_layer];
    let mut guard = None;

    if let Some(dir) = config.access_log_dir() {
        let log_dir = paths::ensure_log_directory(dir)?;
        let appender = tracing_appender::rolling::daily(&log_dir, "access.log");
        let (writer, access_guard) = tracing_appender::non_blocking(appender);

        layers.push(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(Targets::new().with_target("access_log", tracing::Level::INFO))
                .boxed(),
        );
        guard = Some(access_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| ChickenError::Logging(e.to_string()))?;

    match config.access_log_dir() {
        Some(dir) => tracing::info!(log_dir = %dir, "Logging initialized with access log"),
        None => tracing::info!("Logging initialized (console only)"),
    }

    Ok(guard)
}

/// Log platform-specific information on startup
pub fn log_platform_info() {
    tracing::info!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "Server starting on platform"
    );
}
