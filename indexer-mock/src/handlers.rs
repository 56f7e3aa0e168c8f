/// Axum HTTP handlers for the watchlist backend endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::store::{StoreError, WalletStore};
use crate::types::*;

/// Shared application state
pub type AppState = Arc<WalletStore>;

/// Custom error type for handlers. Failures carry a structured `{error}`
/// body, matching what the client parses.
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyAddress => {
                ApiError::BadRequest("Address must not be empty".to_string())
            }
            StoreError::Duplicate(address) => ApiError::BadRequest(format!(
                "Wallet {} is already on the watchlist",
                address
            )),
            StoreError::NotFound(address) => {
                ApiError::NotFound(format!("Wallet {} not found", address))
            }
        }
    }
}

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// GET /api/wallets/
/// Returns the full wallet collection
pub async fn list_wallets(State(store): State<AppState>) -> Json<Vec<WalletResponse>> {
    Json(store.list())
}

/// POST /api/wallets/
/// Adds a wallet with the default tag
pub async fn add_wallet(
    State(store): State<AppState>,
    Json(req): Json<AddWalletRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    store.add(&req.address)?;
    log::info!("Added wallet {}", req.address);
    Ok(Json(MessageResponse {
        message: format!("Wallet {} added to watchlist", req.address),
    }))
}

/// PUT /api/wallets/
/// Overwrites the tag of an existing wallet
pub async fn update_wallet_tag(
    State(store): State<AppState>,
    Json(req): Json<UpdateTagRequest>,
) -> Result<StatusCode, ApiError> {
    store.update_tag(&req.address, &req.tag)?;
    log::info!("Updated wallet {} to tag {}", req.address, req.tag);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/wallets/{address}/
pub async fn delete_wallet(
    State(store): State<AppState>,
    Path(address): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&address)?;
    log::info!("Deleted wallet {}", address);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/search/{contract}
/// Returns an interaction flag for every stored wallet
pub async fn search_interactions(
    State(store): State<AppState>,
    Path(contract): Path<String>,
) -> Json<Vec<SearchResult>> {
    Json(store.search(&contract))
}

/// POST /mock/interactions
/// Test helper: seed interaction facts for a contract
pub async fn seed_interactions(
    State(store): State<AppState>,
    Json(req): Json<SeedInteractionsRequest>,
) -> StatusCode {
    for interaction in &req.interactions {
        store.seed_interaction(&req.contract, &interaction.address, interaction.has_interacted);
    }
    log::debug!(
        "Seeded {} interactions for contract {}",
        req.interactions.len(),
        req.contract
    );
    StatusCode::NO_CONTENT
}

/// POST /mock/reset
/// Test helper: drop all wallets and seeded interactions
pub async fn reset(State(store): State<AppState>) -> StatusCode {
    store.reset();
    StatusCode::NO_CONTENT
}
