//! Block ciphers and modes of operation with constant-time primitives
//!
//! This crate provides the in-house AES implementation, adapters over the
//! RustCrypto block cipher crates, PKCS#7 padding and the seven modes of
//! operation (ECB, CBC, CTR, CFB, OFB, LRW, F8) as stateful transforms.
//!
//! # Security Features
//!
//! - Key schedules and chaining state are wiped on drop
//! - Padding checks run in constant time over the final block
//! - AES uses table-free S-box evaluation

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations and modes
pub mod block;
pub use block::{
    modes::{new_mode, check_iv},
    Aes, BlockCipher, Blowfish, CipherAlgorithm, Cbc, Cfb, Ctr, CtrCounter, CounterEndianness, Des,
    Ecb, F8, KnownAnswer, Lrw, Mode, ModeParams, ModeState, Ofb, SetupFn, TripleDes,
};
#[cfg(feature = "all-ciphers")]
pub use block::{Cast5, Rc2, Twofish};

// Padding
pub mod padding;
