//! Internal utilities for the tcrypt crates
//!
//! Not part of the public API; constant-time comparison, XOR and counter
//! helpers shared by the modes and the padding code.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
