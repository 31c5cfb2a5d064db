//! Electronic codebook (ECB) mode
//!
//! Each block is encrypted independently; there is no IV.

use super::{for_each_block, Mode, ModeState};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode over a keyed cipher
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher> ModeState for Ecb<B> {
    fn mode(&self) -> Mode {
        Mode::Ecb
    }

    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let cipher = &self.cipher;
        for_each_block(data, cipher.block_size(), "ECB", |block| cipher.encrypt_block(block))
    }

    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let cipher = &self.cipher;
        for_each_block(data, cipher.block_size(), "ECB", |block| cipher.decrypt_block(block))
    }

    fn iv(&self) -> &[u8] {
        &[]
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::iv_size("ECB", iv.len(), 0)
    }
}
