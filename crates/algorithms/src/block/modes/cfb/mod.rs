//! Cipher feedback (CFB) mode, full-block feedback
//!
//! The keystream block is the encryption of the previous ciphertext block
//! (the IV for the first one). Data is processed byte by byte, so partial
//! blocks are carried over between calls.

use super::{Mode, ModeState};
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use tcrypt_common::SecretVec;

/// CFB mode implementation
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    /// Ciphertext of the block in progress; the IV before any data
    feedback: SecretVec,
    pad: SecretVec,
    pos: usize,
}

impl<B: BlockCipher> Cfb<B> {
    /// Creates a new CFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let bs = cipher.block_size();
        validate::iv_size("CFB", iv.len(), bs)?;
        Ok(Self {
            cipher,
            feedback: SecretVec::from_slice(iv),
            pad: SecretVec::zeroed(bs),
            pos: bs,
        })
    }

    fn refill(&mut self) -> Result<()> {
        self.pad.as_mut_slice().copy_from_slice(self.feedback.as_slice());
        self.cipher.encrypt_block(self.pad.as_mut_slice())?;
        self.pos = 0;
        Ok(())
    }
}

impl<B: BlockCipher> ModeState for Cfb<B> {
    fn mode(&self) -> Mode {
        Mode::Cfb
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let bs = self.pad.len();
        for byte in data.iter_mut() {
            if self.pos == bs {
                self.refill()?;
            }
            *byte ^= self.pad.as_slice()[self.pos];
            self.feedback.as_mut_slice()[self.pos] = *byte;
            self.pos += 1;
        }
        Ok(())
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let bs = self.pad.len();
        for byte in data.iter_mut() {
            if self.pos == bs {
                self.refill()?;
            }
            self.feedback.as_mut_slice()[self.pos] = *byte;
            *byte ^= self.pad.as_slice()[self.pos];
            self.pos += 1;
        }
        Ok(())
    }

    fn iv(&self) -> &[u8] {
        self.feedback.as_slice()
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::iv_size("CFB", iv.len(), self.cipher.block_size())?;
        self.feedback.as_mut_slice().copy_from_slice(iv);
        self.pos = self.pad.len();
        Ok(())
    }
}
