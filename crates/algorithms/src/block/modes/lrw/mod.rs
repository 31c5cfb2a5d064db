//! LRW tweakable block cipher mode
//!
//! Each block is whitened with pad = T ⊗ I, where T is the 16-byte tweak key
//! and I the big-endian block index seeded from the IV, multiplied in the
//! IEEE P1619 field ordering: C = E(P ⊕ pad) ⊕ pad. The index is incremented after every block.
//! Only 128-bit block ciphers are accepted.

pub mod gf128;

use super::{for_each_block, Mode, ModeState};
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use gf128::gf128_mul;
use tcrypt_common::SecretBuffer;
use tcrypt_internal::constant_time::xor_in_place;
use tcrypt_internal::endian::increment_be;
use tcrypt_params::utils::symmetric::LRW_TWEAK_SIZE;

/// LRW mode implementation
pub struct Lrw<B: BlockCipher> {
    cipher: B,
    tweak: SecretBuffer<16>,
    index: SecretBuffer<16>,
}

impl<B: BlockCipher> Lrw<B> {
    /// Creates a new LRW instance from a 128-bit block cipher, the starting
    /// index and the tweak key
    pub fn new(cipher: B, iv: &[u8], tweak: &[u8]) -> Result<Self> {
        validate::parameter(
            cipher.block_size() == 16,
            "cipher",
            "LRW requires a 128-bit block cipher",
        )?;
        validate::iv_size("LRW", iv.len(), 16)?;
        validate::parameter(tweak.len() == LRW_TWEAK_SIZE, "tweak", "LRW tweak key must be 16 bytes")?;

        let mut state = Self {
            cipher,
            tweak: SecretBuffer::zeroed(),
            index: SecretBuffer::zeroed(),
        };
        state.tweak.as_mut_slice().copy_from_slice(tweak);
        state.index.as_mut_slice().copy_from_slice(iv);
        Ok(state)
    }

    fn pad(&self) -> SecretBuffer<16> {
        SecretBuffer::new(gf128_mul(self.tweak.as_array(), self.index.as_array()))
    }
}

impl<B: BlockCipher> ModeState for Lrw<B> {
    fn mode(&self) -> Mode {
        Mode::Lrw
    }

    fn block_size(&self) -> usize {
        16
    }

    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for_each_block(data, 16, "LRW", |block| {
            let pad = self.pad();
            xor_in_place(block, pad.as_slice());
            self.cipher.encrypt_block(block)?;
            xor_in_place(block, pad.as_slice());
            increment_be(self.index.as_mut_slice());
            Ok(())
        })
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        for_each_block(data, 16, "LRW", |block| {
            let pad = self.pad();
            xor_in_place(block, pad.as_slice());
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, pad.as_slice());
            increment_be(self.index.as_mut_slice());
            Ok(())
        })
    }

    fn iv(&self) -> &[u8] {
        self.index.as_slice()
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::iv_size("LRW", iv.len(), 16)?;
        self.index.as_mut_slice().copy_from_slice(iv);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
