//! Pagination store module
//!
//! The fetch-and-merge state machine at the center of the crate.
//!
//! # Overview
//!
//! The store module provides:
//! - `RosterStore` - accumulated records, pagination metadata, and the
//!   shared fetch lifecycle
//! - `FetchTicket` - per-dispatch tag deciding replace-vs-append and
//!   staleness at settlement time
//! - `Snapshot` - the read-only view handed to rendering layers
//!
//! Every dispatch obtains a ticket from [`RosterStore::begin`] and settles it
//! with [`RosterStore::complete`] or [`RosterStore::fail`]. Out-of-order
//! settlement is safe: a ticket issued before the latest fresh dispatch is
//! stale and its settlement is discarded outright.

mod types;

pub use types::{FetchLifecycle, FetchTicket, Settlement, Snapshot};

use crate::model::{Character, CharacterPage, PageInfo};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Accumulated character roster with merge-or-replace fetch bookkeeping
///
/// Invariants:
/// - no two records share an id; duplicates in fetched pages are dropped,
///   never overwritten
/// - first-seen relative order is preserved; a record's position never
///   changes once inserted
/// - metadata is replaced wholesale on every applied success
#[derive(Debug, Default)]
pub struct RosterStore {
    /// Accumulated records, first-seen order
    records: Vec<Character>,
    /// Ids present in `records`
    seen: HashSet<u64>,
    /// Metadata from the most recently applied success
    info: Option<PageInfo>,
    /// Shared status of the most recent fetch
    lifecycle: FetchLifecycle,
    /// Generation stamp of the last issued ticket
    generation: u64,
    /// Generation of the latest fresh dispatch; older tickets are stale
    fresh_generation: u64,
}

impl RosterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fetch, returning the ticket to settle it with
    ///
    /// Sets the lifecycle to `Loading` before the result is known. A fresh
    /// dispatch clears the roster immediately and supersedes every ticket
    /// issued before it.
    pub fn begin(&mut self, fresh: bool) -> FetchTicket {
        self.generation += 1;
        if fresh {
            self.fresh_generation = self.generation;
            self.records.clear();
            self.seen.clear();
        }
        self.lifecycle = FetchLifecycle::Loading;
        debug!(generation = self.generation, fresh, "fetch dispatched");
        FetchTicket::new(self.generation, fresh)
    }

    /// Settle a successful fetch
    ///
    /// Stale tickets are discarded without touching any state. Otherwise the
    /// page's records are filtered against the ids already present, then
    /// either replace the roster (fresh ticket) or are appended (pagination
    /// ticket); metadata is replaced wholesale either way.
    pub fn complete(&mut self, ticket: FetchTicket, page: CharacterPage) -> Settlement {
        if self.is_stale(ticket) {
            warn!(
                generation = ticket.generation(),
                "discarding stale successful fetch"
            );
            return Settlement::Stale;
        }

        self.lifecycle = FetchLifecycle::Idle;

        let incoming: Vec<Character> = page
            .results
            .into_iter()
            .filter(|record| self.seen.insert(record.id))
            .collect();

        if ticket.is_fresh() {
            self.seen = incoming.iter().map(|record| record.id).collect();
            self.records = incoming;
        } else {
            self.records.extend(incoming);
        }

        self.info = Some(page.info);
        debug!(
            generation = ticket.generation(),
            total = self.records.len(),
            "fetch settled"
        );
        Settlement::Applied
    }

    /// Settle a failed fetch
    ///
    /// Stale tickets are discarded without touching any state. Otherwise the
    /// lifecycle becomes `Failed`; a failed fresh fetch additionally clears
    /// the roster, while a failed pagination fetch leaves it untouched.
    pub fn fail(&mut self, ticket: FetchTicket) -> Settlement {
        if self.is_stale(ticket) {
            warn!(
                generation = ticket.generation(),
                "discarding stale failed fetch"
            );
            return Settlement::Stale;
        }

        self.lifecycle = FetchLifecycle::Failed;
        if ticket.is_fresh() {
            self.records.clear();
            self.seen.clear();
        }
        Settlement::Applied
    }

    /// A ticket issued before the latest fresh dispatch belongs to a
    /// superseded query
    fn is_stale(&self, ticket: FetchTicket) -> bool {
        ticket.generation() < self.fresh_generation
    }

    // ============================================================================
    // Read access
    // ============================================================================

    /// Accumulated records in first-seen order
    pub fn records(&self) -> &[Character] {
        &self.records
    }

    /// Metadata from the most recently applied success
    pub fn info(&self) -> Option<&PageInfo> {
        self.info.as_ref()
    }

    /// Shared status of the most recent fetch
    pub fn lifecycle(&self) -> FetchLifecycle {
        self.lifecycle
    }

    /// Number of accumulated records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether a record id is present
    pub fn contains(&self, id: u64) -> bool {
        self.seen.contains(&id)
    }

    /// Detached read-only view for rendering layers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self.records.clone(),
            lifecycle: self.lifecycle,
            info: self.info.clone(),
        }
    }
}
