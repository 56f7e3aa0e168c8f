//! Remote wallet store client
//!
//! Thin typed wrapper over the backend's wallet-collection endpoints. Every
//! mutating call must be followed by a fresh `list_wallets` before the new
//! state is presented; the controller owns that protocol. There is no push
//! channel, so the window between mutation and refetch is accepted as-is.

use crate::api::error_from_response;
use crate::api::types::{AddWalletRequest, AddWalletResponse, Tag, UpdateTagRequest, WalletRecord};
use crate::error::ApiError;

pub struct WalletStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl WalletStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full wallet collection.
    ///
    /// On failure the caller must treat the collection as unchanged, not as
    /// empty.
    pub async fn list_wallets(&self) -> Result<Vec<WalletRecord>, ApiError> {
        let url = format!("{}/api/wallets/", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let wallets: Vec<WalletRecord> = resp.json().await?;
        log::debug!("Fetched {} wallet records", wallets.len());
        Ok(wallets)
    }

    /// Add an address to the collection. The caller has already rejected
    /// empty/whitespace input; it never reaches this call.
    ///
    /// Returns the backend's confirmation message when it provides one.
    pub async fn add_wallet(&self, address: &str) -> Result<Option<String>, ApiError> {
        let url = format!("{}/api/wallets/", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&AddWalletRequest { address })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let body: AddWalletResponse = resp.json().await?;
        Ok(body.message)
    }

    /// Overwrite the tag on an existing record. Re-setting the same tag is a
    /// data-level no-op; the caller still refetches afterwards.
    pub async fn update_wallet_tag(&self, address: &str, tag: &Tag) -> Result<(), ApiError> {
        let url = format!("{}/api/wallets/", self.base_url);
        let resp = self
            .http
            .put(&url)
            .json(&UpdateTagRequest { address, tag })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }

    /// Delete a record. An unknown address is a backend error and propagates
    /// to the caller; it is never swallowed as a silent success.
    pub async fn delete_wallet(&self, address: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/wallets/{}/", self.base_url, address);
        let resp = self.http.delete(&url).send().await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
}
