//! Qiyas Web Server
//!
//! Run with: cargo run -p qiyas-web --bin qiyas-web

use qiyas_config::Config;
use qiyas_web::{router::build_router, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    qiyas_web::logging::init_tracing(&config.log.filter)?;

    info!("Starting Qiyas web server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config)?;
    info!("Relaying questions to {}", state.relay.endpoint());

    let app = build_router(state, &config.server.static_dir);

    let addr = config.bind_addr()?;
    info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
