//! Cipher registry, streaming sessions and name dispatch for TCRYPT
//!
//! This crate sits on top of the block ciphers and modes in
//! `tcrypt-algorithms` and uses the unified API error system. It provides:
//!
//! - [`CipherDescriptor`]: immutable description of a block cipher
//! - [`CipherRegistry`]: the process-wide, statically enumerable cipher table
//! - [`CipherSession`]: incremental `update`/`finish` over a cipher and mode
//! - [`dispatch`]: construction by cipher name or by mode name
//!
//! The library logs through `tracing` and installs no subscriber.

#![forbid(unsafe_code)]

pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod registry;
pub mod session;

// Re-export main types for convenience
pub use descriptor::{backend, CipherDescriptor, SelfTestFn};
pub use dispatch::{by_cipher_name, by_mode_name, constructor, constructors, decrypt, encrypt, new_cipher, Constructor};
pub use options::CipherOptions;
pub use registry::{registry, CipherRegistry, SkippedCipher, REGISTRY, REGISTRY_NAMES};
pub use session::{CipherSession, SessionState};

// Mode-level types needed to fill in options
pub use tcrypt_algorithms::{CounterEndianness, CtrCounter, Mode};
pub use tcrypt_api::{Direction, KeySizes, Padding};

// Re-export the API error system instead of custom error types
pub use error::{validate, Error, Result, SymmetricResultExt};
