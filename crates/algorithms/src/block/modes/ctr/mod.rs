//! Counter (CTR) mode with byte-granular keystream
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data.
//! The first keystream block is the encryption of the initial counter block,
//! as in NIST SP 800-38A.
//!
//! The counter occupies either the whole block (the default) or a field of
//! `width` bytes: the trailing bytes for a big-endian counter, the leading
//! bytes for a little-endian one. Overflow wraps within the field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Mode, ModeState};
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};
use tcrypt_common::SecretVec;
use tcrypt_internal::constant_time::xor_in_place;
use tcrypt_internal::endian::{increment_be, increment_le};

/// Byte order of the counter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CounterEndianness {
    /// Counter in the trailing bytes, carry towards the front
    #[default]
    Big,
    /// Counter in the leading bytes, carry towards the back
    Little,
}

/// Counter field layout within the counter block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CtrCounter {
    /// Width in bytes; `None` means the whole block
    pub width: Option<usize>,
    /// Byte order of the field
    pub endianness: CounterEndianness,
}

impl CtrCounter {
    /// Big-endian counter in the last `width` bytes
    pub fn big_endian(width: usize) -> Self {
        Self {
            width: Some(width),
            endianness: CounterEndianness::Big,
        }
    }

    /// Little-endian counter in the first `width` bytes
    pub fn little_endian(width: usize) -> Self {
        Self {
            width: Some(width),
            endianness: CounterEndianness::Little,
        }
    }

    fn resolve(&self, block_size: usize) -> Result<usize> {
        let width = self.width.unwrap_or(block_size);
        if width == 0 || width > block_size {
            return Err(Error::param(
                "counter",
                format!("counter width must be between 1 and {} bytes, got {}", block_size, width),
            ));
        }
        Ok(width)
    }
}

/// Counter mode implementation with secure memory handling
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    counter_block: SecretVec,
    keystream: SecretVec,
    keystream_pos: usize,
    width: usize,
    endianness: CounterEndianness,
}

impl<B: BlockCipher> Ctr<B> {
    /// Creates a CTR instance with a full-block big-endian counter
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        Self::with_counter(cipher, iv, CtrCounter::default())
    }

    /// Creates a CTR instance with a custom counter field
    pub fn with_counter(cipher: B, iv: &[u8], counter: CtrCounter) -> Result<Self> {
        let block_size = cipher.block_size();
        validate::iv_size("CTR", iv.len(), block_size)?;
        let width = counter.resolve(block_size)?;

        Ok(Self {
            cipher,
            counter_block: SecretVec::from_slice(iv),
            keystream: SecretVec::zeroed(block_size),
            keystream_pos: block_size,
            width,
            endianness: counter.endianness,
        })
    }

    /// Encrypt the current counter block into the keystream buffer and advance
    fn refill(&mut self) -> Result<()> {
        self.keystream.as_mut_slice().copy_from_slice(self.counter_block.as_slice());
        self.cipher.encrypt_block(self.keystream.as_mut_slice())?;
        self.increment_counter();
        self.keystream_pos = 0;
        Ok(())
    }

    fn increment_counter(&mut self) {
        let block = self.counter_block.as_mut_slice();
        let bs = block.len();
        match self.endianness {
            CounterEndianness::Big => increment_be(&mut block[bs - self.width..]),
            CounterEndianness::Little => increment_le(&mut block[..self.width]),
        }
    }

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        let bs = self.keystream.len();
        let mut offset = 0;
        while offset < data.len() {
            if self.keystream_pos == bs {
                self.refill()?;
            }
            let n = (bs - self.keystream_pos).min(data.len() - offset);
            xor_in_place(
                &mut data[offset..offset + n],
                &self.keystream.as_slice()[self.keystream_pos..],
            );
            self.keystream_pos += n;
            offset += n;
        }
        Ok(())
    }
}

impl<B: BlockCipher> ModeState for Ctr<B> {
    fn mode(&self) -> Mode {
        Mode::Ctr
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

    /// The next counter block to be encrypted
    fn iv(&self) -> &[u8] {
        self.counter_block.as_slice()
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate::iv_size("CTR", iv.len(), self.cipher.block_size())?;
        self.counter_block.as_mut_slice().copy_from_slice(iv);
        self.keystream_pos = self.keystream.len();
        Ok(())
    }
}
