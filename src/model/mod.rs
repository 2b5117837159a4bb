//! Pure domain data structures (DTOs) shared across the resolver core.
//!
//! These types carry no behavior beyond construction helpers. The GraphQL
//! transport layer serializes them directly, so the serde field names mirror
//! the schema's JSON shape.

pub mod identity;
pub mod person;
pub mod pet;
pub mod user;

pub use identity::*;
pub use person::*;
pub use pet::*;
pub use user::*;
