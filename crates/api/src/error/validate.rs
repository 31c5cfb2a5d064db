//! Validation utilities shared by descriptors and sessions

use super::{Error, Result};
use crate::types::KeySizes;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a key length against a set of supported sizes
#[inline(always)]
pub fn key_size(context: &'static str, actual: usize, supported: &KeySizes) -> Result<()> {
    if !supported.contains(actual) {
        return Err(Error::InvalidKeySize {
            context,
            actual,
            supported: supported.to_string(),
        });
    }
    Ok(())
}

/// Validate an IV length
#[inline(always)]
pub fn iv_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a byte count is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, len: usize, block_size: usize) -> Result<()> {
    if block_size == 0 || len % block_size != 0 {
        return Err(Error::IncompleteBlock {
            context,
            buffered: if block_size == 0 { len } else { len % block_size },
            block_size,
        });
    }
    Ok(())
}
