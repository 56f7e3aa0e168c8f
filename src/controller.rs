//! Watchlist reconciliation controller
//!
//! Owns the in-memory wallet collection and the current search outcome,
//! sequences all backend calls, and derives the two display buckets. The
//! collection is a cache of backend truth, never a source of truth: every
//! confirmed mutation is followed by a full refetch before the state is
//! considered current again.
//!
//! All actions take `&mut self`, so a single controller instance serializes
//! its own mutations. Two instances pointed at the same backend can still
//! race; the collection then reflects whichever refetch resolved last
//! (last-refetch-wins, a known gap). There is no cancellation: a dispatched
//! request runs to completion or failure, and dropping the controller drops
//! any in-flight future with it, so a late response never applies after
//! teardown.

use crate::api::types::{Tag, WalletRecord};
use crate::api::{InteractionQueryClient, WalletStoreClient};
use crate::config::ClientConfig;
use crate::notify::{Notifier, Severity};
use crate::view::{SearchOutcome, ViewState};

/// Controller lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Ready,
    Searching,
    Mutating,
}

pub struct WatchlistController {
    wallets: WalletStoreClient,
    interactions: InteractionQueryClient,
    notifier: Box<dyn Notifier>,
    phase: Phase,
    collection: Vec<WalletRecord>,
    search: Option<SearchOutcome>,
}

impl WatchlistController {
    pub fn new(config: &ClientConfig, notifier: Box<dyn Notifier>) -> Self {
        Self {
            wallets: WalletStoreClient::new(config.api_base_url.clone()),
            interactions: InteractionQueryClient::new(config.api_base_url.clone()),
            notifier,
            phase: Phase::Idle,
            collection: Vec::new(),
            search: None,
        }
    }

    /// Initial fetch of the wallet collection.
    ///
    /// Failure is logged but otherwise quiet: the controller comes up
    /// `Ready` with an empty collection and stays usable for search and for
    /// adding wallets. This asymmetry with the loud search/mutation
    /// failures is intentional.
    pub async fn start(&mut self) {
        self.phase = Phase::Fetching;
        match self.wallets.list_wallets().await {
            Ok(records) => self.collection = records,
            Err(e) => log::warn!("Initial wallet fetch failed: {}", e),
        }
        self.phase = Phase::Ready;
    }

    /// Refetch after a confirmed mutation. A failed refetch keeps the
    /// previous (now stale) collection, same as the initial fetch.
    async fn refetch(&mut self) {
        self.phase = Phase::Fetching;
        match self.wallets.list_wallets().await {
            Ok(records) => self.collection = records,
            Err(e) => log::warn!("Wallet refetch failed, keeping stale collection: {}", e),
        }
        self.phase = Phase::Ready;
    }

    /// Run an interaction search for `contract`.
    ///
    /// Prior results are discarded before the request goes out, so the view
    /// never shows a stale set under the new query. Re-entrant calls while
    /// a search is in flight are ignored; only one search per controller
    /// instance is ever in flight.
    pub async fn submit_search(&mut self, contract: &str) {
        if self.phase == Phase::Searching {
            return;
        }
        let contract = contract.trim();
        if contract.is_empty() {
            self.notifier
                .notify(Severity::Error, "Enter a token contract address to search");
            return;
        }

        self.search = None;
        self.phase = Phase::Searching;
        let outcome = match self.interactions.search(contract).await {
            Ok(results) => SearchOutcome {
                contract: contract.to_string(),
                results,
                failed: false,
            },
            Err(e) => {
                log::error!("Interaction search for {} failed: {}", contract, e);
                self.notifier.notify(
                    Severity::Error,
                    &e.user_message("Failed to check token interactions"),
                );
                SearchOutcome {
                    contract: contract.to_string(),
                    results: Vec::new(),
                    failed: true,
                }
            }
        };
        self.search = Some(outcome);
        self.phase = Phase::Ready;
    }

    /// Add `address` to the watchlist. Empty or whitespace input is
    /// rejected here and never reaches the wire.
    pub async fn add_wallet(&mut self, address: &str) {
        let address = address.trim();
        if address.is_empty() {
            self.notifier
                .notify(Severity::Error, "Enter a wallet address to add");
            return;
        }

        self.phase = Phase::Mutating;
        match self.wallets.add_wallet(address).await {
            Ok(message) => {
                let message =
                    message.unwrap_or_else(|| "Wallet added successfully".to_string());
                self.notifier.notify(Severity::Info, &message);
                self.refetch().await;
            }
            Err(e) => {
                self.phase = Phase::Ready;
                self.notifier
                    .notify(Severity::Error, &e.user_message("Failed to add wallet"));
            }
        }
    }

    /// Demote a Watchlist entry to the Store bucket.
    pub async fn move_to_store(&mut self, address: &str) {
        self.update_tag(address, Tag::Store).await;
    }

    /// Promote a Store entry back onto the Watchlist.
    pub async fn move_to_watchlist(&mut self, address: &str) {
        self.update_tag(address, Tag::Watchlist).await;
    }

    async fn update_tag(&mut self, address: &str, tag: Tag) {
        self.phase = Phase::Mutating;
        match self.wallets.update_wallet_tag(address, &tag).await {
            Ok(()) => {
                self.notifier
                    .notify(Severity::Info, "Wallet tag updated successfully");
                self.refetch().await;
            }
            Err(e) => {
                self.phase = Phase::Ready;
                self.notifier.notify(
                    Severity::Error,
                    &e.user_message("Failed to update wallet tag"),
                );
            }
        }
    }

    /// Remove an entry from the collection.
    ///
    /// Only the Watchlist bucket offers removal; stored addresses are
    /// deliberately not deletable through this interface.
    pub async fn remove_from_watchlist(&mut self, address: &str) {
        self.phase = Phase::Mutating;
        match self.wallets.delete_wallet(address).await {
            Ok(()) => {
                self.notifier
                    .notify(Severity::Info, "Wallet deleted successfully");
                self.refetch().await;
            }
            Err(e) => {
                self.phase = Phase::Ready;
                self.notifier
                    .notify(Severity::Error, &e.user_message("Failed to delete wallet"));
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The raw collection, including records no bucket renders.
    pub fn collection(&self) -> &[WalletRecord] {
        &self.collection
    }

    /// Records tagged `Watchlist`. Derived on every call from the single
    /// source collection.
    pub fn watchlist(&self) -> Vec<&WalletRecord> {
        bucket(&self.collection, &Tag::Watchlist)
    }

    /// Records tagged `Store`.
    pub fn stored(&self) -> Vec<&WalletRecord> {
        bucket(&self.collection, &Tag::Store)
    }

    /// Outcome of the most recently completed search, if any.
    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.search.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.phase == Phase::Searching
    }

    /// Snapshot for a presentation binding.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            phase: self.phase,
            watchlist: self.watchlist().into_iter().cloned().collect(),
            stored: self.stored().into_iter().cloned().collect(),
            search: self.search.clone(),
            searching: self.is_searching(),
        }
    }
}

fn bucket<'a>(collection: &'a [WalletRecord], tag: &Tag) -> Vec<&'a WalletRecord> {
    collection.iter().filter(|w| &w.tag == tag).collect()
}
