//! # castlist
//!
//! Client and browse engine for paginated character APIs with search,
//! status filtering, and infinite-scroll pagination.
//!
//! The invariant-bearing core is a fetch-and-merge state machine: appended
//! pages are deduplicated by record id, a new search replaces the
//! accumulated roster, overlapping in-flight fetches are resolved with
//! per-dispatch tickets, and a pure scroll policy decides when the next
//! page is requested.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use castlist::api::RestCharacterSource;
//! use castlist::scroll::Viewport;
//! use castlist::session::BrowseSession;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut session = BrowseSession::new(RestCharacterSource::new());
//!
//!     session.search("rick").await;
//!     session.scrolled(Viewport::at_bottom(2000.0, 800.0)).await;
//!
//!     let snapshot = session.snapshot();
//!     for character in &snapshot.records {
//!         println!("{} ({})", character.name, character.status);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       BrowseSession                         │
//! │  search(text)    filter(status)    scrolled(viewport)       │
//! └─────────────────────────────────────────────────────────────┘
//!            │                  │                  │
//! ┌──────────┴─────┐  ┌─────────┴────────┐  ┌──────┴──────────┐
//! │  CharacterSource│  │   RosterStore    │  │  scroll policy  │
//! │  (api + http)   │  │  merge/replace   │  │  pure decision  │
//! │  one operation  │  │  ticket staleness│  │  + guard flag   │
//! └─────────────────┘  └──────────────────┘  └─────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Wire data model
pub mod model;

/// HTTP client
pub mod http;

/// Character API and remote source seam
pub mod api;

/// Pagination store (fetch-and-merge state machine)
pub mod store;

/// Scroll-trigger policy
pub mod scroll;

/// Browse session orchestration
pub mod session;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use model::{Character, CharacterPage, CharacterStatus, PageInfo};
pub use session::{BrowseSession, QueryState};
pub use store::{FetchLifecycle, RosterStore, Snapshot};
pub use types::StatusFilter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
