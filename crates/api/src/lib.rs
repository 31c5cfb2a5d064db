//! Public error taxonomy and shared types for the TCRYPT library
//!
//! This crate provides the public API surface shared by the tcrypt crates:
//! the [`Error`] taxonomy reported by every fallible operation, and the small
//! value types (direction, padding policy, key size sets) that sessions and
//! descriptors are configured with.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;
