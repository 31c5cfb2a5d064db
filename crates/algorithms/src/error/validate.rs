//! Validation utilities for cipher primitives and modes

use super::{Error, Result};
use tcrypt_api::KeySizes;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a key length against the sizes a cipher accepts
#[inline(always)]
pub fn key_size(algorithm: &'static str, actual: usize, supported: KeySizes) -> Result<()> {
    if !supported.contains(actual) {
        return Err(Error::KeySize {
            algorithm,
            actual,
            supported,
        });
    }
    Ok(())
}

/// Validate an IV length
#[inline(always)]
pub fn iv_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::IvSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `len` is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, len: usize, block_size: usize) -> Result<()> {
    if len % block_size != 0 {
        return Err(Error::IncompleteBlock {
            context,
            buffered: len % block_size,
            block_size,
        });
    }
    Ok(())
}
