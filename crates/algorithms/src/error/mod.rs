//! Error handling for block ciphers and modes

use std::borrow::Cow;

use tcrypt_api::{Error as CoreError, KeySizes, Result as CoreResult};
use thiserror::Error;

/// The error type for cipher primitives and modes of operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key length not accepted by the cipher
    #[error("{algorithm}: unsupported key size {actual} (supported: {supported})")]
    KeySize {
        /// Cipher that rejected the key
        algorithm: &'static str,
        /// Supplied key length in bytes
        actual: usize,
        /// Key lengths the cipher accepts
        supported: KeySizes,
    },

    /// IV length does not match the mode
    #[error("{context}: invalid IV size (expected {expected}, got {actual})")]
    IvSize {
        /// Mode that rejected the IV
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed PKCS#7 padding
    #[error("{context}: invalid padding")]
    Padding {
        /// Operation that rejected the padding
        context: &'static str,
    },

    /// Data is not a whole number of blocks
    #[error("{context}: {buffered} trailing bytes do not form a {block_size}-byte block")]
    IncompleteBlock {
        /// Operation that found the partial block
        context: &'static str,
        /// Number of trailing bytes
        buffered: usize,
        /// Cipher block size
        block_size: usize,
    },

    /// Known-answer self test mismatch
    #[error("self test failed for {algorithm}")]
    SelfTest {
        /// Cipher whose vector did not reproduce
        algorithm: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for cipher primitives and modes
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidParameter {
                context,
                message: format!("expected {} bytes, got {}", expected, actual),
            },
            Error::KeySize { algorithm, actual, supported } => CoreError::InvalidKeySize {
                context: algorithm,
                actual,
                supported: supported.to_string(),
            },
            Error::IvSize { context, expected, actual } => CoreError::InvalidIvSize {
                context,
                expected,
                actual,
            },
            Error::Padding { context } => CoreError::PaddingError { context },
            Error::IncompleteBlock { context, buffered, block_size } => CoreError::IncompleteBlock {
                context,
                buffered,
                block_size,
            },
            Error::SelfTest { algorithm } => CoreError::SelfTestFailed { cipher: algorithm },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
