use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use app_config::MonitoringConfig;
use app_error::{AppErrorExt, AppResult};

/// Install the global tracing subscriber and, when a DSN is configured, Sentry.
///
/// `RUST_LOG` overrides `monitoring.logging.level`. The returned guard flushes
/// Sentry on drop and must be held for the life of the process.
pub fn init(config: &MonitoringConfig) -> AppResult<Option<sentry::ClientInitGuard>> {
    let guard = if config.sentry.dsn.is_empty() {
        None
    } else {
        Some(sentry::init((
            config.sentry.dsn.clone(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                sample_rate: config.sentry.sample_rate,
                traces_sample_rate: config.sentry.traces_sample_rate,
                environment: Some(config.sentry.environment.clone().into()),
                ..Default::default()
            },
        )))
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .server_err()?;

    let fmt_layer = match config.logging.format.as_str() {
        "json" => fmt::layer().json().boxed(),
        "compact" => fmt::layer().compact().boxed(),
        _ => fmt::layer().pretty().boxed(),
    };

    let sentry_layer = guard.as_ref().map(|_| sentry_tracing::layer());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .with(sentry_layer)
        .try_init()
        .server_err()?;

    if guard.is_some() {
        tracing::info!(environment = %config.sentry.environment, "Sentry initialized");
    } else {
        tracing::info!("Sentry DSN not configured, skipping Sentry initialization");
    }

    Ok(guard)
}
