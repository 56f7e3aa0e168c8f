/// Axum HTTP server setup and routing

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::*;
use crate::store::WalletStore;

pub fn create_router(store: Arc<WalletStore>) -> Router {
    // Configure CORS to allow requests from browser clients/tests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Wallet collection endpoints
        .route(
            "/api/wallets/",
            get(list_wallets).post(add_wallet).put(update_wallet_tag),
        )
        .route("/api/wallets/:address", delete(delete_wallet))
        .route("/api/wallets/:address/", delete(delete_wallet))

        // Interaction search
        .route("/api/search/:contract", get(search_interactions))

        // Test helper endpoints
        .route("/mock/interactions", post(seed_interactions))
        .route("/mock/reset", post(reset))

        // Shared state
        .with_state(store)

        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(store: Arc<WalletStore>, host: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("Watchlist indexer mock listening on http://{}", addr);
    log::info!("Interaction seeding endpoint: POST /mock/interactions");

    axum::serve(listener, app).await?;

    Ok(())
}
