//! URL-keyed cache for lord-name resolution.
//!
//! A house row shows its current lord by dereferencing a character URL. The
//! cache keeps one entry per URL so the same reference is fetched at most
//! once across rows and re-renders, and so a failed lookup stays settled
//! instead of retrying forever.

use std::collections::HashMap;

/// Display text for an absent, pending, or failed lord link.
pub const UNKNOWN: &str = "Unknown";

/// Lifecycle of one URL's resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolutionState {
    /// A request is in flight.
    Pending,
    /// The referenced character's display name.
    Resolved(String),
    /// The lookup failed; not retried.
    Failed,
}

/// Cache of lord-link resolutions keyed by character URL.
#[derive(Clone, Debug, Default)]
pub struct ResolverCache {
    entries: HashMap<String, ResolutionState>,
}

impl ResolverCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display text for a URL: the resolved name, or "Unknown" while the
    /// lookup is pending, failed, or not yet requested.
    pub fn display(&self, url: &str) -> &str {
        match self.entries.get(url) {
            Some(ResolutionState::Resolved(name)) => name,
            _ => UNKNOWN,
        }
    }

    /// Marks the URL pending if it has no entry yet. Returns `true` exactly
    /// when the caller should issue the fetch, so at most one request is in
    /// flight per URL.
    pub fn claim(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries
            .insert(url.to_string(), ResolutionState::Pending);
        true
    }

    /// Settles a claimed URL with the fetch outcome.
    pub fn resolve(&mut self, url: &str, outcome: Result<String, String>) {
        let state = match outcome {
            Ok(name) => ResolutionState::Resolved(name),
            Err(_) => ResolutionState::Failed,
        };
        self.entries.insert(url.to_string(), state);
    }

    pub fn get(&self, url: &str) -> Option<&ResolutionState> {
        self.entries.get(url)
    }
}
