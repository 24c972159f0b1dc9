//! gurbani-api - REST service serving assembled line and shabad views
//! from the read-only scripture corpus.

use anyhow::Result;
use gurbani_api::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting gurbani-api v{}", env!("CARGO_PKG_VERSION"));

    let cli_arg = std::env::args().nth(1);
    let db_path = gurbani_common::config::resolve_database_path(cli_arg.as_deref());
    info!("Scripture database: {}", db_path.display());

    let pool = gurbani_common::db::connect_readonly(&db_path).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:4753").await?;
    info!("gurbani-api listening on http://127.0.0.1:4753");
    info!("Health check: http://127.0.0.1:4753/health");

    axum::serve(listener, app).await?;

    Ok(())
}
