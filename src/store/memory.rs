//! In-memory [`TableClient`] used by the test suite.
//!
//! Records are kept in insertion order, which stands in for the canonical
//! sort order of the real store. The table is cheaply cloneable: clones share
//! the same underlying records, so a test can keep a handle while a service
//! owns another.

use crate::store::{Keyed, RawPage, StoreError, TableClient};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

/// An in-memory key/sort-indexed table.
#[derive(Debug)]
pub struct MemoryTable<T> {
    records: Arc<Mutex<Vec<T>>>,
}

// Hand-written so that `Default` and `Clone` do not demand them of `T`:
// an empty table and a shared handle need neither.
impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            records: Arc::default(),
        }
    }
}

impl<T> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Keyed + Clone> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Insert a record synchronously, bypassing the async contract.
    /// Test setup helper; panics if the table lock is poisoned.
    pub fn seed(&self, record: T) {
        self.records
            .lock()
            .expect("table lock poisoned")
            .push(record);
    }

    /// Snapshot of every record in store order. Test assertion helper.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.lock().expect("table lock poisoned").clone()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError("table lock poisoned".into()))
    }
}

#[async_trait]
impl<T> TableClient<T> for MemoryTable<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<T>, StoreError> {
        let records = self.lock()?;
        Ok(records.iter().find(|r| r.key() == key).cloned())
    }

    async fn put(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.lock()?;
        // Replacing in place preserves the record's position in store order.
        match records.iter().position(|r| r.key() == record.key()) {
            Some(idx) => records[idx] = record,
            None => records.push(record),
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut records = self.lock()?;
        match records.iter().position(|r| r.key() == key) {
            Some(idx) => {
                records.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn query_page(
        &self,
        limit: usize,
        exclusive_start: Option<&str>,
    ) -> Result<RawPage<T>, StoreError> {
        let records = self.lock()?;

        // An unknown start key resumes past the end, like a stale token.
        let start = match exclusive_start {
            None => 0,
            Some(key) => records
                .iter()
                .position(|r| r.key() == key)
                .map_or(records.len(), |idx| idx + 1),
        };
        let end = start.saturating_add(limit).min(records.len());
        let items: Vec<T> = records[start..end].to_vec();

        // The continuation key is only reported while records remain past the
        // returned window.
        let last_key = if end < records.len() {
            items.last().map(|r| r.key().to_owned())
        } else {
            None
        };

        Ok(RawPage { items, last_key })
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }
}
