//! # Paged Store Access
//!
//! This module defines the seam between the resolver core and the
//! key/sort-indexed document store.
//!
//! ## Key Types
//!
//! - [`TableClient`]: the raw store primitive: fetch a page after an
//!   exclusive start key, full-record put, conditional delete, total count.
//! - [`PagedSource`]: what the connection assembler consumes. Implemented
//!   once, generically, for every [`TableClient`].
//! - [`MemoryTable`]: an in-memory [`TableClient`] for tests.
//!
//! ## The Off-by-One Quirk
//!
//! The store's native pagination primitive cannot fetch zero records: its
//! minimum page size is 1, and "more pages exist" is only reported as a side
//! effect of actually fetching. A caller asking for a zero-size page still
//! needs a correct `more_remain` answer, so the [`PagedSource`] blanket
//! implementation probes with a single record, discards it, and reports
//! whether the probe found anything. That policy lives here, in exactly one
//! place, rather than in every resource service.

pub mod memory;

pub use memory::MemoryTable;

use async_trait::async_trait;
use thiserror::Error;

/// An I/O failure against the document store or the identity provider.
///
/// The core never retries these; retry and timeout policy belong to the
/// caller or the underlying client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

/// A record that exposes the continuation key it sorts under.
///
/// The key doubles as the record's unique identifier within its kind and as
/// the exclusive start position for resuming a paged query.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// One raw page straight from the store primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage<T> {
    /// Records in canonical store order (insertion/index order).
    pub items: Vec<T>,
    /// Continuation key past the returned window; `Some` means at least one
    /// more page exists.
    pub last_key: Option<String>,
}

/// The raw key/sort-indexed table primitive.
///
/// This is the abstract stand-in for the concrete document-store client. Wire
/// protocol details are out of scope; the core only depends on this contract.
///
/// Implementations may assume `limit >= 1` in [`TableClient::query_page`]:
/// the store cannot fetch zero records, and the zero-size policy is handled
/// above this trait (see the module docs).
#[async_trait]
pub trait TableClient<T: Keyed>: Send + Sync {
    /// Fetch a single record by key.
    async fn get(&self, key: &str) -> Result<Option<T>, StoreError>;

    /// Insert or replace a record. Whole-record overwrite; no partial patch.
    async fn put(&self, record: T) -> Result<(), StoreError>;

    /// Remove a record. Returns whether a record existed under `key`.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Fetch up to `limit` records strictly after `exclusive_start`
    /// (`None` = from the start), in canonical store order.
    async fn query_page(
        &self,
        limit: usize,
        exclusive_start: Option<&str>,
    ) -> Result<RawPage<T>, StoreError>;

    /// Total record count for this kind. Served by a separate index query and
    /// only eventually consistent with [`TableClient::query_page`].
    async fn count(&self) -> Result<usize, StoreError>;
}

/// One window of records plus whether anything exists past it.
///
/// `more_remain` is independent of how many records were returned: a
/// zero-size window can still report that records remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub more_remain: bool,
}

/// Fixed-size windows over a resource kind, as consumed by the connection
/// assembler.
///
/// Unlike [`TableClient::query_page`], `first == 0` is a legal request here
/// and yields zero records with a correct `more_remain`.
#[async_trait]
pub trait PagedSource<T: Keyed>: Send + Sync {
    /// Fetch up to `first` records strictly after `after_key` (empty key =
    /// from the start).
    async fn query(&self, first: usize, after_key: &str) -> Result<Page<T>, StoreError>;

    /// Count of all records of this kind, regardless of any page window.
    /// Invoked once per list request; eventual consistency with the page
    /// fetch is acceptable and expected.
    async fn total_count(&self) -> Result<usize, StoreError>;
}

#[async_trait]
impl<T, C> PagedSource<T> for C
where
    T: Keyed + Send + Sync + 'static,
    C: TableClient<T>,
{
    async fn query(&self, first: usize, after_key: &str) -> Result<Page<T>, StoreError> {
        // The store's minimum fetchable page is 1: a zero-size request probes
        // with a single record and discards it below.
        let limit = first.max(1);
        let exclusive_start = if after_key.is_empty() {
            None
        } else {
            Some(after_key)
        };

        let raw = self.query_page(limit, exclusive_start).await?;
        let mut more_remain = raw.last_key.is_some();

        if first == 0 {
            // The probe producing a record is itself proof that something
            // exists past `after_key`, even when the store reports no further
            // continuation point.
            if !raw.items.is_empty() {
                more_remain = true;
            }
            return Ok(Page {
                records: Vec::new(),
                more_remain,
            });
        }

        Ok(Page {
            records: raw.items,
            more_remain,
        })
    }

    async fn total_count(&self) -> Result<usize, StoreError> {
        self.count().await
    }
}
