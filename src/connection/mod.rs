//! # Connection Assembly
//!
//! Everything needed to turn a `(first, after)` page request into a
//! Relay-style connection.
//!
//! ## Key Types
//!
//! - [`CursorEncoder`]: reversible transform between opaque external cursors
//!   and internal continuation keys.
//! - [`Paginator`]: the assembler: decode, fetch one window, fetch the
//!   total, re-encode cursors.
//! - [`Connection`], [`Edge`], [`PageInfo`]: the result envelope.

pub mod cursor;
pub mod paginator;
pub mod types;

pub use cursor::{CursorEncoder, DecodeError};
pub use paginator::{AssembleError, Paginator};
pub use types::{Connection, Edge, PageInfo};
