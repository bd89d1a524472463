use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use guestbook_api::{AppStateInner, router};
use guestbook_db::ConnectionManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "guestbook_server=debug,guestbook_api=debug,guestbook_db=debug,tower_http=debug"
                    .into()
            }),
        )
        .init();

    // Config
    let db_path = std::env::var("GUESTBOOK_DB_PATH").unwrap_or_else(|_| "guestbook.db".into());
    let host = std::env::var("GUESTBOOK_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("GUESTBOOK_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let list_limit: u32 = std::env::var("GUESTBOOK_LIST_LIMIT")
        .unwrap_or_else(|_| "100".into())
        .parse()?;

    // Shared state; the database itself is opened lazily on first use, so a
    // bad path surfaces as a request error rather than a startup crash
    let state = Arc::new(AppStateInner {
        connections: ConnectionManager::new(db_path),
        list_limit,
    });

    let app: Router = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Guestbook server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
