//! Browse session module
//!
//! The fetch orchestrator and UI-facing query state.
//!
//! # Overview
//!
//! The session module provides:
//! - `BrowseSession` - owns the store, the source, the query state, and the
//!   scroll guard; turns UI events into dispatches and settlements
//! - `QueryState` - current search text, status filter, and page number,
//!   round-trippable through URL query parameters
//!
//! All state transitions happen in response to discrete events (search,
//! filter, scroll, settlement) and run to completion; the network await
//! inside a dispatch is the only suspension point. Fetch errors are
//! converted to lifecycle transitions here and never propagate to
//! rendering code.

mod types;

pub use types::QueryState;

use crate::api::CharacterSource;
use crate::scroll::{should_fetch_next, ScrollGuard, Viewport};
use crate::store::{RosterStore, Snapshot};
use crate::types::StatusFilter;
use tracing::warn;

/// An interactive browse over a paginated character listing
///
/// Overlapping dispatches are allowed (no cancellation); the store's ticket
/// bookkeeping resolves out-of-order settlements.
#[derive(Debug)]
pub struct BrowseSession<S: CharacterSource> {
    source: S,
    store: RosterStore,
    query: QueryState,
    guard: ScrollGuard,
}

impl<S: CharacterSource> BrowseSession<S> {
    /// Create a session with default query state
    pub fn new(source: S) -> Self {
        Self::with_query(source, QueryState::default())
    }

    /// Create a session with restored query state (e.g. from a URL)
    pub fn with_query(source: S, query: QueryState) -> Self {
        Self {
            source,
            store: RosterStore::new(),
            query: query.first_page(),
            guard: ScrollGuard::Ready,
        }
    }

    /// Current query state
    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    /// Current scroll guard state
    pub fn guard(&self) -> ScrollGuard {
        self.guard
    }

    /// Read-only view of the store for rendering
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Direct read access to the store
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Dispatch the current query as a fresh fetch
    ///
    /// Used for the initial load and for explicit reloads.
    pub async fn refresh(&mut self) {
        self.dispatch(true).await;
    }

    /// Change the search text and start a fresh query from page 1
    pub async fn search(&mut self, text: impl Into<String>) {
        self.query.name = text.into();
        self.query.page = 1;
        self.dispatch(true).await;
    }

    /// Change the status filter and start a fresh query from page 1
    pub async fn filter(&mut self, status: StatusFilter) {
        self.query.status = status;
        self.query.page = 1;
        self.dispatch(true).await;
    }

    /// React to a scroll event
    ///
    /// Consults the trigger policy; on trigger, advances the page, holds the
    /// guard, and dispatches a pagination fetch. Returns whether a fetch was
    /// dispatched.
    pub async fn scrolled(&mut self, viewport: Viewport) -> bool {
        let total_pages = self.store.info().map_or(0, |info| info.pages);
        if !should_fetch_next(viewport, self.query.page, total_pages, self.guard) {
            return false;
        }

        self.query.page += 1;
        self.guard = ScrollGuard::Busy;
        self.dispatch(false).await;
        true
    }

    /// Run one fetch to settlement
    async fn dispatch(&mut self, fresh: bool) {
        let ticket = self.store.begin(fresh);
        let query = self.query.to_query();

        match self.source.fetch(&query).await {
            Ok(page) => {
                self.store.complete(ticket, page);
            }
            Err(e) => {
                warn!(error = %e, fresh, "fetch failed");
                self.store.fail(ticket);
            }
        }

        // Coarse re-enable signal: any settlement that leaves records on
        // screen re-arms the trigger
        if !self.store.is_empty() {
            self.guard = ScrollGuard::Ready;
        }
    }
}

#[cfg(test)]
mod tests;
