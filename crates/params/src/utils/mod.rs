//! Utility constants for block ciphers and modes

pub mod names;
pub mod symmetric;
