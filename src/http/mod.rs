//! HTTP client module
//!
//! Thin wrapper over reqwest used by the API layer.
//!
//! # Features
//!
//! - **Base URL handling**: relative paths resolved against a configured base
//! - **Query/header composition**: per-request config via builder
//! - **Error classification**: non-2xx responses surface as status errors
//!
//! Requests are never retried; a failed fetch settles as failed and the
//! caller decides whether to dispatch again.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
