//! Application state for the salary rank API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ReferenceTable;

/// Public origin used when no other is configured.
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";

/// Shared application state.
///
/// Holds the reference table loaded at startup and the public origin used to
/// build absolute share links.
#[derive(Debug, Clone)]
pub struct AppState {
    table: Arc<ReferenceTable>,
    public_url: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the given reference table.
    pub fn new(table: ReferenceTable) -> Self {
        Self::with_public_url(table, DEFAULT_PUBLIC_URL)
    }

    /// Creates a new application state with an explicit public origin.
    pub fn with_public_url(table: ReferenceTable, public_url: &str) -> Self {
        Self {
            table: Arc::new(table),
            public_url: Arc::from(public_url),
        }
    }

    /// Returns a reference to the reference table.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Returns the public origin for share links.
    pub fn public_url(&self) -> &str {
        &self.public_url
    }
}
