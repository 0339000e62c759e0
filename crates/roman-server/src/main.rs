//! Roman Numeral Converter HTTP Server
//!
//! Provides a REST API converting decimal numbers and ranges to Roman numerals.

use anyhow::Result;
use roman_server::{api, config::ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    let addr = config.bind_addr();
    let port = config.port;
    let metrics_enabled = config.enable_metrics;

    let app = api::create_router(config);

    // Start server
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://localhost:{}/health", port);
    info!("  Convert API: http://localhost:{}{}/convert", port, api::rest::API_V1_PREFIX);
    info!(
        "  API docs: http://localhost:{}{}/",
        port,
        api::rest::openapi::SWAGGER_UI_PATH
    );
    if metrics_enabled {
        info!("  Metrics: http://localhost:{}/metrics", port);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let level = &config.log_level;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("roman_server={level},roman_core={level},tower_http=debug").into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
