//! Constant values for the TCRYPT library
//!
//! Name lists the registries are populated from, block and key sizes of the
//! supported ciphers, and the session defaults.

#![forbid(unsafe_code)]

pub mod utils;

pub use utils::names::*;
