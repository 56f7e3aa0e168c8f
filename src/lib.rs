//! Token-interaction search and wallet watchlist client.
//!
//! Talks to an external indexing backend over HTTP: a taggable collection of
//! wallet records, and a per-contract check of which stored addresses have
//! interacted with a given token. [`WatchlistController`] owns all local
//! state, reconciles it against backend truth after every mutation, and
//! feeds any presentation binding through [`ViewState`] snapshots.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod view;

// Re-export the main types
pub use api::types::{InteractionResult, Tag, WalletRecord};
pub use api::{InteractionQueryClient, WalletStoreClient};
pub use config::ClientConfig;
pub use controller::{Phase, WatchlistController};
pub use error::ApiError;
pub use notify::{LogNotifier, Notifier, Severity};
pub use view::{SearchOutcome, View, ViewState};
