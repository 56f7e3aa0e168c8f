//! In-memory wallet store backing the mock API

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::{SearchResult, WalletResponse};

/// Tag assigned to newly added wallets.
pub const DEFAULT_TAG: &str = "Watchlist";

#[derive(Debug)]
pub enum StoreError {
    EmptyAddress,
    Duplicate(String),
    NotFound(String),
}

#[derive(Debug, Clone)]
struct StoredWallet {
    address: String,
    tag: String,
    date_added: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    /// Insertion-ordered; addresses are unique (primary key)
    wallets: Vec<StoredWallet>,
    /// contract -> address -> interaction flag
    interactions: HashMap<String, HashMap<String, bool>>,
}

pub struct WalletStore {
    inner: Mutex<Inner>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn list(&self) -> Vec<WalletResponse> {
        let inner = self.inner.lock().unwrap();
        inner
            .wallets
            .iter()
            .map(|w| WalletResponse {
                address: w.address.clone(),
                tag: w.tag.clone(),
                date_added: w.date_added,
            })
            .collect()
    }

    pub fn add(&self, address: &str) -> Result<(), StoreError> {
        if address.trim().is_empty() {
            return Err(StoreError::EmptyAddress);
        }
        let mut inner = self.inner.lock().unwrap();
        if inner.wallets.iter().any(|w| w.address == address) {
            return Err(StoreError::Duplicate(address.to_string()));
        }
        inner.wallets.push(StoredWallet {
            address: address.to_string(),
            tag: DEFAULT_TAG.to_string(),
            date_added: Utc::now(),
        });
        Ok(())
    }

    /// Full overwrite of the tag. Any string is accepted and preserved so
    /// clients can round-trip values the UI does not render.
    pub fn update_tag(&self, address: &str, tag: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let wallet = inner
            .wallets
            .iter_mut()
            .find(|w| w.address == address)
            .ok_or_else(|| StoreError::NotFound(address.to_string()))?;
        wallet.tag = tag.to_string();
        Ok(())
    }

    pub fn delete(&self, address: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.wallets.len();
        inner.wallets.retain(|w| w.address != address);
        if inner.wallets.len() == before {
            return Err(StoreError::NotFound(address.to_string()));
        }
        Ok(())
    }

    /// Interaction check for every stored wallet against `contract`.
    /// Unseeded pairs default to "no interaction".
    pub fn search(&self, contract: &str) -> Vec<SearchResult> {
        let inner = self.inner.lock().unwrap();
        let flags = inner.interactions.get(contract);
        inner
            .wallets
            .iter()
            .map(|w| SearchResult {
                address: w.address.clone(),
                has_interacted: flags
                    .and_then(|f| f.get(&w.address).copied())
                    .unwrap_or(false),
            })
            .collect()
    }

    pub fn seed_interaction(&self, contract: &str, address: &str, has_interacted: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .interactions
            .entry(contract.to_string())
            .or_default()
            .insert(address.to_string(), has_interacted);
    }

    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.wallets.clear();
        inner.interactions.clear();
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}
