//! Process-level wiring: service construction and observability.

pub mod registry;
pub mod tracing;

pub use self::registry::Registry;
pub use self::tracing::setup_tracing;
