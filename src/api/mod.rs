//! Character API module
//!
//! Query construction and the remote data source seam.
//!
//! # Overview
//!
//! The api module provides:
//! - `CharacterQuery` - search/filter/page parameters for one request
//! - `CharacterSource` - the single-operation trait the core depends on
//! - `RestCharacterSource` - HTTP-backed implementation
//!
//! The core never talks to the network directly; everything goes through
//! [`CharacterSource::fetch`], which makes the store and session testable
//! against scripted sources.

mod query;
mod source;

pub use query::CharacterQuery;
pub use source::{CharacterSource, RestCharacterSource, DEFAULT_BASE_URL};
