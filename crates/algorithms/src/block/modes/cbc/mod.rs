//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode provides confidentiality by XORing each plaintext block with the
//! previous ciphertext block before encryption. The first block is XORed
//! with the initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. The chaining value carries
//! over between calls, so a message may be processed in any number of
//! block-aligned pieces.

use super::{for_each_block, Mode, ModeState};
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use tcrypt_common::SecretVec;
use tcrypt_internal::constant_time::xor_in_place;

/// CBC mode implementation
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: SecretVec,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::iv_size("CBC", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: SecretVec::from_slice(iv),
        })
    }
}

impl<B: BlockCipher> ModeState for Cbc<B> {
    fn mode(&self) -> Mode {
        Mode::Cbc
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let Self { cipher, iv } = self;
        for_each_block(data, cipher.block_size(), "CBC", |block| {
            // XOR with previous ciphertext block (or IV for the first block)
            xor_in_place(block, iv.as_slice());
            cipher.encrypt_block(block)?;
            iv.as_mut_slice().copy_from_slice(block);
            Ok(())
        })
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let Self { cipher, iv } = self;
        let mut saved = SecretVec::zeroed(cipher.block_size());
        for_each_block(data, cipher.block_size(), "CBC", |block| {
            saved.as_mut_slice().copy_from_slice(block);
            cipher.decrypt_block(block)?;
            xor_in_place(block, iv.as_slice());
            iv.as_mut_slice().copy_from_slice(saved.as_slice());
            Ok(())
        })
    }

    fn iv(&self) -> &[u8] {
        self.iv.as_slice()
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::iv_size("CBC", iv.len(), self.cipher.block_size())?;
        self.iv.as_mut_slice().copy_from_slice(iv);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
