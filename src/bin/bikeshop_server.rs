//! Bikeshop HTTP server
//!
//! Serves the catalog, compatibility, pricing, admin and cart routes
//! over one in-memory store preloaded with the demo catalog.

use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use bikeshop::api;
use bikeshop::seed;
use bikeshop::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let store = Arc::new(MemoryStore::new());
    seed::load_demo_catalog(&store)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::create_router(store)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIKESHOP_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("bikeshop server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
