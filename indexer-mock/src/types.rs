/// Watchlist backend API types
///
/// These match the wire format the client consumes so it can be pointed at
/// the mock transparently.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wallet record from GET /api/wallets/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletResponse {
    pub address: String,
    pub tag: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct AddWalletRequest {
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    pub address: String,
    pub tag: String,
}

/// One entry from GET /api/search/{contract}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub address: String,
    #[serde(rename = "hasInteracted")]
    pub has_interacted: bool,
}

/// Seed request for POST /mock/interactions
#[derive(Debug, Deserialize)]
pub struct SeedInteractionsRequest {
    pub contract: String,
    pub interactions: Vec<SeedInteraction>,
}

#[derive(Debug, Deserialize)]
pub struct SeedInteraction {
    pub address: String,
    pub has_interacted: bool,
}
