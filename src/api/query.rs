//! Query construction for the character listing endpoint
//!
//! Only non-default parameters are emitted: an empty (or all-whitespace)
//! name is omitted, an inactive status filter is omitted, and page 1 is
//! omitted because it is the API default.

use crate::types::StatusFilter;

/// Parameters for one paginated character request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterQuery {
    /// Search text matched against character names
    pub name: String,
    /// Life-status filter
    pub status: StatusFilter,
    /// Page number, 1-based
    pub page: u32,
}

impl CharacterQuery {
    /// Create a query for the first page with no filters
    pub fn new() -> Self {
        Self {
            name: String::new(),
            status: StatusFilter::Any,
            page: 1,
        }
    }

    /// Set the name filter
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the status filter
    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the page number (1-based; 0 is treated as the first page)
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Return to the first page, keeping the filters
    #[must_use]
    pub fn first_page(self) -> Self {
        self.with_page(1)
    }

    /// Query parameters in wire order, defaults omitted
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        let name = self.name.trim();
        if !name.is_empty() {
            params.push(("name".to_string(), name.to_string()));
        }
        if let Some(status) = self.status.as_param() {
            params.push(("status".to_string(), status.to_string()));
        }
        if self.page > 1 {
            params.push(("page".to_string(), self.page.to_string()));
        }
        params
    }
}
