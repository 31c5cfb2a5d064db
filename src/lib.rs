//! # tcrypt
//!
//! A block cipher and mode-of-operation engine with a uniform streaming
//! interface, reachable by cipher name or by mode name.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tcrypt = "0.3"
//! ```
//!
//! ```
//! use tcrypt::prelude::*;
//!
//! let key = [0u8; 16];
//! let iv = [0u8; 16];
//! let opts = CipherOptions::new().cipher("aes").mode("ctr").iv(&iv);
//!
//! let ct = tcrypt::symmetric::encrypt(&key, opts, b"hello").unwrap();
//! let pt = tcrypt::symmetric::decrypt(&key, opts, &ct).unwrap();
//! assert_eq!(pt, b"hello");
//! ```
//!
//! ## Features
//!
//! - `all-ciphers`: register Twofish, CAST5 and RC2 alongside the default set
//! - `serde`: serialization of modes, directions, padding and counter layouts
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`tcrypt-algorithms`]: Block ciphers, modes of operation, padding
//! - [`tcrypt-symmetric`]: Cipher registry, sessions and name dispatch

#![forbid(unsafe_code)]

// Core re-exports
pub use tcrypt_algorithms as algorithms;
pub use tcrypt_api as api;
pub use tcrypt_common as common;
pub use tcrypt_internal as internal;
pub use tcrypt_params as params;
pub use tcrypt_symmetric as symmetric;

/// Common imports for tcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Direction, Error, KeySizes, Padding, Result};

    // Re-export core traits
    pub use crate::algorithms::{BlockCipher, CipherAlgorithm, ModeState};

    // Re-export session construction
    pub use crate::symmetric::{
        by_cipher_name, by_mode_name, new_cipher, CipherDescriptor, CipherOptions, CipherSession, Constructor,
        CtrCounter, Mode, SessionState,
    };

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec};
}
