//! Interaction query client
//!
//! Single read query keyed by token contract address. The caller clears its
//! previous result set before issuing the call so a stale set is never
//! rendered under the new query's in-flight window.

use crate::api::error_from_response;
use crate::api::types::InteractionResult;
use crate::error::ApiError;

pub struct InteractionQueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InteractionQueryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Ask the backend which stored addresses have interacted with the given
    /// token contract.
    ///
    /// On failure the result set must be treated as empty, never as
    /// partially populated; "failed" and "ran with zero matches" are
    /// different states and the caller keeps them distinct.
    pub async fn search(&self, contract_address: &str) -> Result<Vec<InteractionResult>, ApiError> {
        let url = format!("{}/api/search/{}", self.base_url, contract_address);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let results: Vec<InteractionResult> = resp.json().await?;
        log::debug!(
            "Interaction search for {} returned {} entries",
            contract_address,
            results.len()
        );
        Ok(results)
    }
}
