//! Security primitives and memory safety utilities

pub mod memory;
pub mod secret;

pub use memory::barrier;
pub use secret::{SecretBuffer, SecretVec};
