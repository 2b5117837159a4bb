//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Service entry points are `#[instrument]`ed, so every operation shows up as
//! a span carrying its arguments, and the store/assembler layers log
//! structured fields underneath it.
//!
//! Levels are driven by `RUST_LOG`:
//!
//! ```bash
//! # Operation-level logs
//! RUST_LOG=info cargo test
//!
//! # Full window/cursor detail
//! RUST_LOG=debug cargo test
//!
//! # Filter to one layer
//! RUST_LOG=pawtrack::connection=debug cargo test
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); span names
//! already identify the operation.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
