//! Shared secret-holding containers for the TCRYPT library
//!
//! Key bytes, chaining values and not-yet-processed plaintext live in the
//! containers defined here so they are wiped when a session or cipher
//! instance is dropped.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretVec};

// Re-export memory barrier utilities
pub use security::barrier;
