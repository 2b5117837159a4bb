//! The connection assembler.

use crate::connection::cursor::{CursorEncoder, DecodeError};
use crate::connection::types::{Connection, Edge, PageInfo};
use crate::store::{Keyed, Page, PagedSource, StoreError};
use thiserror::Error;
use tracing::debug;

/// Failures while assembling a connection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssembleError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Turns `(first, after)` page requests into connections.
///
/// The assembler owns no state beyond the cursor encoder: every call decodes
/// the caller's cursor, fetches one window from the source, fetches the total
/// count, and re-encodes per-record cursors in store order. The window and
/// the total are independent round trips with no ordering guarantee between
/// them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    encoder: CursorEncoder,
}

impl Paginator {
    pub fn new(encoder: CursorEncoder) -> Self {
        Self { encoder }
    }

    /// Assemble one connection of up to `first` edges strictly after the
    /// position `after` encodes.
    pub async fn assemble<T, S>(
        &self,
        source: &S,
        first: usize,
        after: &str,
    ) -> Result<Connection<T>, AssembleError>
    where
        T: Keyed + Send + Sync,
        S: PagedSource<T>,
    {
        let after_key = self.encoder.decode(after)?;
        let Page {
            records,
            more_remain,
        } = source.query(first, &after_key).await?;
        let total_count = source.total_count().await?;

        let end_cursor = records
            .last()
            .map(|record| self.encoder.encode(record.key()))
            .unwrap_or_default();

        let edges: Vec<Edge<T>> = records
            .into_iter()
            .map(|record| {
                let cursor = self.encoder.encode(record.key());
                Edge {
                    node: record,
                    cursor,
                }
            })
            .collect();

        debug!(
            first,
            total_count,
            edges = edges.len(),
            has_next_page = more_remain,
            "assembled connection"
        );

        Ok(Connection {
            total_count,
            edges,
            page_info: PageInfo {
                end_cursor,
                has_next_page: more_remain,
            },
        })
    }
}
