//! F8 mode (RFC 3711 §4.1.2)
//!
//! A second cipher instance keyed with `key ⊕ (salt ‖ 0x55…)` encrypts the IV
//! into the masked IV `IV'`. The keystream is then
//! `S[j] = E(IV' ⊕ j ⊕ S[j-1])` with `S[-1] = 0` and the block counter `j`
//! written big-endian into the last four bytes. Encryption and decryption
//! are the same operation.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroizing;

use super::{Mode, ModeState};
use crate::block::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use tcrypt_common::SecretVec;
use tcrypt_internal::constant_time::xor_in_place;
use tcrypt_params::utils::symmetric::F8_SALT_FILLER;

/// Derive the masking key: the salt XORed over the key prefix and the
/// filler byte over the rest
pub fn mask_key(key: &[u8], salt: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    validate::parameter(
        salt.len() <= key.len(),
        "salt_key",
        "F8 salt key must not be longer than the key",
    )?;
    let mut masked = Zeroizing::new(key.to_vec());
    for (i, byte) in masked.iter_mut().enumerate() {
        *byte ^= salt.get(i).copied().unwrap_or(F8_SALT_FILLER);
    }
    Ok(masked)
}

/// F8 mode implementation
pub struct F8<B: BlockCipher> {
    cipher: B,
    masked: B,
    iv: SecretVec,
    masked_iv: SecretVec,
    register: SecretVec,
    block_count: u32,
    pos: usize,
}

impl<B: BlockCipher> F8<B> {
    /// Creates an F8 instance from the cipher keyed with the session key,
    /// the cipher keyed with the masked key, and the IV
    pub fn new(cipher: B, masked: B, iv: &[u8]) -> Result<Self> {
        let bs = cipher.block_size();
        validate::iv_size("F8", iv.len(), bs)?;
        validate::parameter(
            masked.block_size() == bs,
            "cipher",
            "F8 ciphers must share a block size",
        )?;

        let mut state = Self {
            cipher,
            masked,
            iv: SecretVec::from_slice(iv),
            masked_iv: SecretVec::zeroed(bs),
            register: SecretVec::zeroed(bs),
            block_count: 0,
            pos: bs,
        };
        state.restart()?;
        Ok(state)
    }

    /// Recompute IV' from the stored IV and reset the keystream
    fn restart(&mut self) -> Result<()> {
        self.masked_iv.copy_from(self.iv.as_slice());
        self.masked.encrypt_block(self.masked_iv.as_mut_slice())?;
        self.register.as_mut_slice().fill(0);
        self.block_count = 0;
        self.pos = self.register.len();
        Ok(())
    }

    fn next_block(&mut self) -> Result<()> {
        let bs = self.register.len();
        let register = self.register.as_mut_slice();
        xor_in_place(register, self.masked_iv.as_slice());

        let mut counter = [0u8; 4];
        BigEndian::write_u32(&mut counter, self.block_count);
        xor_in_place(&mut register[bs - 4..], &counter);
        self.block_count = self.block_count.wrapping_add(1);

        self.cipher.encrypt_block(register)?;
        self.pos = 0;
        Ok(())
    }

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        let bs = self.register.len();
        let mut offset = 0;
        while offset < data.len() {
            if self.pos == bs {
                self.next_block()?;
            }
            let n = (bs - self.pos).min(data.len() - offset);
            xor_in_place(&mut data[offset..offset + n], &self.register.as_slice()[self.pos..]);
            self.pos += n;
            offset += n;
        }
        Ok(())
    }
}

impl<C: CipherAlgorithm> F8<C> {
    /// Key both cipher instances from the key and salt key
    pub fn from_key(key: &[u8], salt_key: &[u8], iv: &[u8]) -> Result<Self> {
        let masked = C::new(&mask_key(key, salt_key)?)?;
        Self::new(C::new(key)?, masked, iv)
    }
}

impl<B: BlockCipher> ModeState for F8<B> {
    fn mode(&self) -> Mode {
        Mode::F8
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
        self.iv.as_slice()
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::iv_size("F8", iv.len(), self.cipher.block_size())?;
        self.iv.copy_from(iv);
        self.restart()
    }
}

#[cfg(test)]
mod tests;
