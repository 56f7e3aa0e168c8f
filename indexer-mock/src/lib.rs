/// Indexer Mock Server Library
///
/// This crate provides both a standalone binary and library components for
/// mocking the watchlist/indexer backend API with an in-memory store.

pub mod handlers;
pub mod server;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use server::{create_router, run_server};
pub use store::WalletStore;
pub use types::*;
