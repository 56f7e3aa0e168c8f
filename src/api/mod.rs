//! Typed clients for the watchlist backend
//!
//! - Wallet store: CRUD over the tagged wallet collection
//! - Interaction search: per-contract interaction check

pub mod search;
pub mod types;
pub mod wallets;

// Re-export main types
pub use search::InteractionQueryClient;
pub use wallets::WalletStoreClient;

use crate::error::ApiError;

/// Convert a non-2xx response into an [`ApiError`], preferring the backend's
/// structured `{error}` body when one is present.
pub(crate) async fn error_from_response(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    if let Ok(body) = resp.json::<types::ErrorBody>().await {
        if let Some(message) = body.error {
            return ApiError::Validation(message);
        }
    }
    ApiError::Server { status }
}
