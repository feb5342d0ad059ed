//! Session types
//!
//! The UI-facing query state and its round trip through URL query
//! parameters, so a search survives navigation and reload.

use crate::api::CharacterQuery;
use crate::types::StatusFilter;
use url::form_urlencoded;

/// Current search text, status filter, and page number
///
/// Owned by the session; the core receives it as input and does not persist
/// it. Only `name` and `status` are addressable state; the page number
/// always restarts at 1 on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Search text matched against character names
    pub name: String,
    /// Life-status filter
    pub status: StatusFilter,
    /// Page number, 1-based
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: StatusFilter::Any,
            page: 1,
        }
    }
}

impl QueryState {
    /// Create default query state
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore query state from a URL query string
    ///
    /// Absent parameters mean defaults (empty search, any status); an
    /// unrecognized status value is treated as absent. Accepts an optional
    /// leading `?`.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "name" => state.name = value.into_owned(),
                "status" => state.status = value.parse().unwrap_or(StatusFilter::Any),
                _ => {}
            }
        }
        state
    }

    /// Serialize the addressable parts as a URL query string
    ///
    /// Defaults are omitted; an empty state serializes to an empty string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let name = self.name.trim();
        if !name.is_empty() {
            serializer.append_pair("name", name);
        }
        if let Some(status) = self.status.as_param() {
            serializer.append_pair("status", status);
        }
        serializer.finish()
    }

    /// Reset to the first page, keeping the filters
    #[must_use]
    pub fn first_page(mut self) -> Self {
        self.page = 1;
        self
    }

    /// The request this state currently describes
    pub fn to_query(&self) -> CharacterQuery {
        CharacterQuery::new()
            .with_name(self.name.clone())
            .with_status(self.status)
            .with_page(self.page)
    }
}
