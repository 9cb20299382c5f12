//! Read-only client for the Ice and Fire REST API.
//!
//! The remote serves paginated collections
//! (`GET {base}/{category}?page=N&pageSize=M`, 1-based pages) and single
//! records behind the hyperlinks embedded in those collections. This crate
//! wraps both shapes behind [`ApiClient`] with typed errors; it performs no
//! caching and no writes.

mod client;
mod error;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
