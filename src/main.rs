//! MedAI Clerk marketing site server
//!
//! Entry point: loads configuration, sets up logging and serves the site.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use medai_clerk_web::config::AppConfig;
use medai_clerk_web::error::AppError;
use medai_clerk_web::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    // Help, version and usage errors print and exit with clap's own status
    let config = match AppConfig::load() {
        Ok(config) => Arc::new(config),
        Err(AppError::Cli(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        base_url = %config.site.base_url,
        static_dir = %config.server.static_dir.display(),
        "Configuration loaded"
    );

    server::start_server(config).await?;
    Ok(())
}
