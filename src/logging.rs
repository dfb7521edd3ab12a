use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gassplit=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("gassplit=info,warn,error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log HTTP requests against the places and price services.
///
/// Only the endpoint is logged, never the full query string, which would
/// leak the API key.
pub fn log_http_request(method: &str, endpoint: &str, status: Option<u16>) {
    if let Some(status_code) = status {
        tracing::info!(
            method = method,
            endpoint = endpoint,
            status = status_code,
            "HTTP request completed"
        );
    } else {
        tracing::debug!(method = method, endpoint = endpoint, "HTTP request initiated");
    }
}

/// Log a cache hit for a named entry.
pub fn log_cache_hit(entry: &str) {
    tracing::debug!(entry = entry, "Served from cache");
}

/// Log a completed cost calculation.
pub fn log_calculation(distance_km: f64, persons: u32, total: f64) {
    tracing::info!(
        distance_km = distance_km,
        persons = persons,
        total = total,
        "Cost calculation completed"
    );
}
