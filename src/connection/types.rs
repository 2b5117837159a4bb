//! The Relay-style connection envelope.

use serde::{Deserialize, Serialize};

/// Pagination metadata for one connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the last returned edge; empty when no edges were returned.
    pub end_cursor: String,
    /// Whether records exist strictly after the last returned edge (or, for a
    /// zero-size page, after the requested start position).
    pub has_next_page: bool,
}

/// One node plus the cursor that resumes the listing right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

/// A paginated result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Count of all records of this kind. Informational: fetched separately
    /// from the page window and only eventually consistent with it.
    pub total_count: usize,
    /// At most `first` edges, in canonical store order.
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}
