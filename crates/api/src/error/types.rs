//! Error type definitions for cipher operations

use thiserror::Error;

/// Primary error type for cipher, registry and session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No cipher is registered under the requested name
    #[error("unknown cipher '{name}'")]
    UnknownCipher {
        /// Requested cipher name
        name: String,
    },

    /// No mode of operation exists under the requested name
    #[error("unknown mode '{name}'")]
    UnknownMode {
        /// Requested mode name
        name: String,
    },

    /// Key length is not one the cipher accepts
    #[error("{context}: invalid key size {actual} (supported: {supported})")]
    InvalidKeySize {
        /// Cipher or operation that rejected the key
        context: &'static str,
        /// Supplied key length in bytes
        actual: usize,
        /// Human-readable list of supported sizes
        supported: String,
    },

    /// IV length does not match what the mode expects
    #[error("{context}: invalid IV size (expected {expected}, got {actual})")]
    InvalidIvSize {
        /// Mode that rejected the IV
        context: &'static str,
        /// Expected length in bytes (0 when the mode takes no IV)
        expected: usize,
        /// Supplied length in bytes (0 when no IV was supplied)
        actual: usize,
    },

    /// A partial block was left over where the mode needs whole blocks
    #[error("{context}: {buffered} trailing bytes do not form a {block_size}-byte block")]
    IncompleteBlock {
        /// Operation that found the partial block
        context: &'static str,
        /// Number of bytes left over
        buffered: usize,
        /// Block size of the cipher
        block_size: usize,
    },

    /// PKCS#7 padding was malformed on decryption
    #[error("{context}: invalid padding")]
    PaddingError {
        /// Operation that rejected the padding
        context: &'static str,
    },

    /// The session was already finished
    #[error("{operation} called on a finished session")]
    SessionFinished {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// A cipher was registered twice under the same name
    #[error("cipher '{name}' is already registered")]
    DuplicateCipher {
        /// Name of the cipher
        name: String,
    },

    /// A cipher name is known but no backend is compiled for it
    #[error("no backend is available for cipher '{name}'")]
    UnsupportedBackend {
        /// Name of the cipher
        name: String,
    },

    /// A mode option is missing or out of range
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Parameter or operation at fault
        context: &'static str,
        /// Details about the failure
        message: String,
    },

    /// A known-answer self test did not reproduce its vector
    #[error("self test failed for cipher '{cipher}'")]
    SelfTestFailed {
        /// Cipher whose self test failed
        cipher: &'static str,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `UnknownCipher` error
    pub fn unknown_cipher(name: impl Into<String>) -> Self {
        Error::UnknownCipher { name: name.into() }
    }

    /// Shorthand to create an `UnknownMode` error
    pub fn unknown_mode(name: impl Into<String>) -> Self {
        Error::UnknownMode { name: name.into() }
    }

    /// Replace the context of errors that carry one
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeySize { actual, supported, .. } => Self::InvalidKeySize {
                context,
                actual,
                supported,
            },
            Self::InvalidIvSize { expected, actual, .. } => Self::InvalidIvSize {
                context,
                expected,
                actual,
            },
            Self::IncompleteBlock { buffered, block_size, .. } => Self::IncompleteBlock {
                context,
                buffered,
                block_size,
            },
            Self::PaddingError { .. } => Self::PaddingError { context },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            other => other,
        }
    }
}
