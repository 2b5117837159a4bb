//! Resource service façades.
//!
//! One service per resource kind, composing the connection assembler and the
//! ownership authorizer with the store/directory seams. Each operation is
//! all-or-nothing with respect to its typed error set; nothing is retried
//! here.

pub mod person;
pub mod pet;
pub mod user;

pub use person::*;
pub use pet::*;
pub use user::*;
