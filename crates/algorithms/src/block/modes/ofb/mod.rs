//! Output feedback (OFB) mode
//!
//! The keystream is the IV encrypted repeatedly: K[i] = E(K[i-1]).
//! Encryption and decryption are the same operation.

use super::{Mode, ModeState};
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use tcrypt_common::SecretVec;
use tcrypt_internal::constant_time::xor_in_place;

/// OFB mode implementation
pub struct Ofb<B: BlockCipher> {
    cipher: B,
    register: SecretVec,
    pos: usize,
}

impl<B: BlockCipher> Ofb<B> {
    /// Creates a new OFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let bs = cipher.block_size();
        validate::iv_size("OFB", iv.len(), bs)?;
        Ok(Self {
            cipher,
            register: SecretVec::from_slice(iv),
            pos: bs,
        })
    }

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        let bs = self.register.len();
        let mut offset = 0;
        while offset < data.len() {
            if self.pos == bs {
                self.cipher.encrypt_block(self.register.as_mut_slice())?;
                self.pos = 0;
            }
            let n = (bs - self.pos).min(data.len() - offset);
            xor_in_place(&mut data[offset..offset + n], &self.register.as_slice()[self.pos..]);
            self.pos += n;
            offset += n;
        }
        Ok(())
    }
}

impl<B: BlockCipher> ModeState for Ofb<B> {
    fn mode(&self) -> Mode {
        Mode::Ofb
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    fn iv(&self) -> &[u8] {
        self.register.as_slice()
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::iv_size("OFB", iv.len(), self.cipher.block_size())?;
        self.register.as_mut_slice().copy_from_slice(iv);
        self.pos = self.register.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
