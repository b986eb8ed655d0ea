//! Presensi Server - Headless Daemon
//!
//! A pure Rust HTTP server that, on every `POST /presensi`:
//! - logs in to the university SSO through the SAML browser flow
//! - scrapes the attendance overview and each pending session's detail page
//! - answers with `{status, wisPresensi, durungPresensi}` as JSON
//!
//! Access via: http://localhost:8080/presensi

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod router;
mod server_utils;
mod state;
#[cfg(test)]
mod test_helpers;

use presensi_core::{Credentials, PortalClient, PortalConfig};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = presensi_core::metrics::init_metrics() {
        warn!("⚠️ Metrics disabled: {}", e);
    }

    let credentials = Credentials::from_base64(&cli.username_b64, &cli.password_b64)
        .map_err(|e| anyhow::anyhow!("Invalid credentials: {}", e))?;
    let config = PortalConfig::from_origins(&cli.portal_origin, &cli.sso_origin)
        .with_timeout_secs(cli.upstream_timeout)
        .with_detail_concurrency(usize::from(cli.detail_concurrency));

    info!(
        portal = %config.base_origin,
        sso = %cli.sso_origin,
        username = credentials.username(),
        "🔐 SSO credentials loaded"
    );

    let state = AppState::new(PortalClient::new(config, credentials));
    let app = router::build_router(state);

    let listener = server_utils::create_listener(&cli.host, cli.port).await?;
    info!("🚀 APInya jalan on http://{}:{}/presensi", cli.host, cli.port);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
