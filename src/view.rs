//! Presentation-facing state snapshot

use crate::api::types::{InteractionResult, WalletRecord};
use crate::controller::Phase;

/// Outcome of the most recently completed search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Contract address the results belong to
    pub contract: String,
    pub results: Vec<InteractionResult>,
    /// True when the query failed; distinguishes "no data because the
    /// request failed" from "ran and found nothing"
    pub failed: bool,
}

/// Immutable snapshot handed to a presentation binding.
///
/// The buckets are recomputed from the controller's single collection on
/// every snapshot, never stored separately, so they cannot drift from it.
/// Records with a tag outside `Watchlist`/`Store` stay in the underlying
/// collection but appear in neither bucket.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub phase: Phase,
    pub watchlist: Vec<WalletRecord>,
    pub stored: Vec<WalletRecord>,
    pub search: Option<SearchOutcome>,
    /// True while a search is in flight; bindings should disable their
    /// search trigger
    pub searching: bool,
}

/// A presentation binding. It renders snapshots and calls the controller's
/// action methods; it never mutates state directly.
pub trait View {
    fn render(&mut self, state: &ViewState);
}
