//! Store types
//!
//! The shared fetch lifecycle, per-dispatch tickets, and the read-only
//! snapshot handed to rendering layers.

use crate::model::{Character, PageInfo};
use serde::{Deserialize, Serialize};

/// Shared status of the most recent fetch
///
/// A single status for the whole store, not per-request: a new dispatch
/// overwrites whatever the previous one left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchLifecycle {
    /// No fetch in flight; the last one (if any) succeeded
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last settled fetch failed
    Failed,
}

impl FetchLifecycle {
    /// Check for the idle state
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check for an in-flight fetch
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check for a failed last fetch
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Tag issued at dispatch time and presented back at settlement
///
/// Carries the replace-vs-append decision with the request it belongs to,
/// and a generation stamp that lets the store discard settlements of
/// requests superseded by a later fresh dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    fresh: bool,
}

impl FetchTicket {
    pub(crate) fn new(generation: u64, fresh: bool) -> Self {
        Self { generation, fresh }
    }

    /// Generation stamp assigned at dispatch
    pub fn generation(self) -> u64 {
        self.generation
    }

    /// Whether this dispatch replaces the roster rather than extending it
    pub fn is_fresh(self) -> bool {
        self.fresh
    }
}

/// Outcome of presenting a ticket back to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The settlement was applied to the store
    Applied,
    /// The ticket was superseded; the settlement was discarded
    Stale,
}

impl Settlement {
    /// Check whether the settlement was applied
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Check whether the settlement was discarded as stale
    pub fn is_stale(self) -> bool {
        matches!(self, Self::Stale)
    }
}

/// Read-only view of the store for rendering layers
///
/// A detached copy: presentational consumers cannot mutate store state
/// through it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Accumulated records in first-seen order
    pub records: Vec<Character>,
    /// Shared status of the most recent fetch
    pub lifecycle: FetchLifecycle,
    /// Metadata from the most recently applied success
    pub info: Option<PageInfo>,
}

impl Snapshot {
    /// The "nothing found" message applies when the last fetch failed and
    /// there is nothing to show
    pub fn is_empty_failure(&self) -> bool {
        self.lifecycle.is_failed() && self.records.is_empty()
    }
}
