//! PKCS#7 padding
//!
//! Padding always adds between 1 and `block_size` bytes, each equal to the
//! number of bytes added; a whole block is added when the data is already
//! aligned. Stripping checks the final block in constant time.

use crate::error::{validate, Error, Result};
use tcrypt_internal::constant_time::ct_pkcs7_pad_len;

/// Largest block size PKCS#7 can describe
pub const MAX_BLOCK_SIZE: usize = 255;

/// Number of pad bytes PKCS#7 appends to `len` bytes of data
pub fn pad_len(len: usize, block_size: usize) -> usize {
    block_size - (len % block_size)
}

/// Append PKCS#7 padding to `data`
pub fn pad(data: &mut Vec<u8>, block_size: usize) -> Result<()> {
    validate::parameter(
        (1..=MAX_BLOCK_SIZE).contains(&block_size),
        "block_size",
        "PKCS#7 supports block sizes from 1 to 255 bytes",
    )?;
    let n = pad_len(data.len(), block_size);
    data.resize(data.len() + n, n as u8);
    Ok(())
}

/// Length of the unpadded data in `data`, whose last block is padded
pub fn unpadded_len(data: &[u8], block_size: usize) -> Result<usize> {
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(Error::IncompleteBlock {
            context: "PKCS#7 unpad",
            buffered: data.len() % block_size,
            block_size,
        });
    }
    let last = &data[data.len() - block_size..];
    match ct_pkcs7_pad_len(last) {
        Some(n) => Ok(data.len() - n),
        None => Err(Error::Padding { context: "PKCS#7 unpad" }),
    }
}

/// Remove PKCS#7 padding from `data` in place
pub fn unpad(data: &mut Vec<u8>, block_size: usize) -> Result<()> {
    let len = unpadded_len(data, block_size)?;
    data.truncate(len);
    Ok(())
}
