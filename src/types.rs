//! Common types used throughout castlist
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Status Filter
// ============================================================================

/// Life-status filter for character queries
///
/// `Any` is the default and produces no query parameter; the remaining
/// variants map to the API's lowercase `status` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No filtering on status
    #[default]
    Any,
    /// Only living characters
    Alive,
    /// Only dead characters
    Dead,
    /// Only characters with unknown status
    Unknown,
}

impl StatusFilter {
    /// Query parameter value, or `None` when the filter is inactive
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Alive => Some("alive"),
            Self::Dead => Some("dead"),
            Self::Unknown => Some("unknown"),
        }
    }

    /// Check whether this filter restricts results
    pub fn is_active(self) -> bool {
        self != Self::Any
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or("any"))
    }
}

impl FromStr for StatusFilter {
    type Err = crate::error::Error;

    /// Parse a filter value; the empty string and `any` both mean no filter
    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(Self::Any),
            "alive" => Ok(Self::Alive),
            "dead" => Ok(Self::Dead),
            "unknown" => Ok(Self::Unknown),
            other => Err(crate::error::Error::invalid_query(
                "status",
                format!("expected one of any, alive, dead, unknown; got '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
