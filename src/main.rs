//! client-restrict
//!
//! Serves a single service that only answers requests whose resolved
//! remote address equals the configured allowed IP.
//!
//! ```text
//!  Client ──▶ listener ──▶ trace / request-id ──▶ gate ──▶ service
//!                                                  │
//!                                                  └──▶ 401 not allowed
//! ```

use clap::Parser;

use client_restrict::cli::Cli;
use client_restrict::config::validation::is_canonical_ip;
use client_restrict::observability::init_logging;
use client_restrict::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_logging(&config.observability.log_level);

    tracing::info!("client-restrict v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_ip = %config.access.allowed_ip,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if !is_canonical_ip(&config.access.allowed_ip) {
        tracing::warn!(
            allowed_ip = %config.access.allowed_ip,
            "allowed IP is not a canonical IP literal; forwarded addresses will never match it"
        );
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let listener = server.bind().await?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
