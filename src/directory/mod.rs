//! # Identity Directory
//!
//! The seam over the managed identity provider. Users live in the provider,
//! not in the document store; this core only ever reads them, to validate a
//! proposed pet owner or to list them as a connection.
//!
//! The provider paginates its own listings, so a directory is also a
//! [`PagedSource<User>`], unified under the same continuation-key model as
//! the document tables.

use crate::model::User;
use crate::store::{MemoryTable, Page, PagedSource, StoreError, TableClient};
use async_trait::async_trait;

/// Read-only view of the identity provider's user pool.
#[async_trait]
pub trait IdentityDirectory: PagedSource<User> {
    /// Look up a single user by username. `Ok(None)` means the provider does
    /// not know the username; `Err` is an I/O failure.
    async fn lookup(&self, username: &str) -> Result<Option<User>, StoreError>;
}

/// In-memory directory for tests, listing users in insertion order.
///
/// Clones share the same user pool, like [`MemoryTable`] clones share their
/// records.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    users: MemoryTable<User>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self {
            users: MemoryTable::new(),
        }
    }

    /// Register a user synchronously. Test setup helper.
    pub fn seed(&self, user: User) {
        self.users.seed(user);
    }
}

#[async_trait]
impl PagedSource<User> for MemoryDirectory {
    async fn query(&self, first: usize, after_key: &str) -> Result<Page<User>, StoreError> {
        self.users.query(first, after_key).await
    }

    async fn total_count(&self) -> Result<usize, StoreError> {
        self.users.total_count().await
    }
}

#[async_trait]
impl IdentityDirectory for MemoryDirectory {
    async fn lookup(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.users.get(username).await
    }
}
