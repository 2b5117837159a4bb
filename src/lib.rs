//! # Pawtrack
//!
//! > **The resolver core for a pet registry GraphQL backend.**
//!
//! This crate implements the domain core that sits between a GraphQL transport
//! layer and a key/sort-indexed document store plus a managed identity
//! provider. It exposes CRUD services over pets, people, and users, with two
//! pieces of real logic:
//!
//! - **Cursor-based pagination**: translating opaque cursors into store-native
//!   continuation keys and assembling Relay-style connections, including the
//!   store's "cannot fetch zero records" quirk.
//! - **Ownership-transfer authorization**: deciding whether a caller may
//!   reassign a pet's owner.
//!
//! ## Design Philosophy
//!
//! Every external collaborator (the document table, the identity directory) is
//! a capability trait injected into the services at construction time. There
//! are no process-wide singletons, no internal retries, and no caching: each
//! call is a short-lived request/response round trip, and retry/timeout policy
//! belongs to the caller.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`connection`], [`store`])
//! The generic machinery. [`store::PagedSource`] yields fixed-size windows
//! over a resource kind; [`connection::Paginator`] turns those windows into
//! connections with per-node cursors.
//!
//! ### 2. The Collaborator Contracts ([`store::TableClient`], [`directory`])
//! Abstract seams over the document store and the identity provider. The
//! in-memory implementations ([`store::MemoryTable`],
//! [`directory::MemoryDirectory`]) back the test suite.
//!
//! ### 3. The Decision ([`auth`])
//! [`auth::PetAuthorizer`], a pure capability check with no stored grants.
//!
//! ### 4. The Façades ([`service`])
//! [`service::PetService`], [`service::PersonService`], and
//! [`service::UserService`] compose the engine and the decision into the
//! operations the resolvers call.
//!
//! ### 5. The Wiring ([`lifecycle`])
//! [`lifecycle::Registry`] builds every service from injected clients, and
//! [`lifecycle::setup_tracing`] initializes structured logging.
//!
//! ## Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod auth;
pub mod connection;
pub mod directory;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod store;
