//! Block cipher implementations and the capability they share
//!
//! Every cipher, whether the in-house AES or one of the RustCrypto backed
//! ciphers, is reached through the object-safe [`BlockCipher`] trait so the
//! modes and the registry can hold any of them behind a `Box`.
//!
//! ## Example usage
//!
//! ```
//! use tcrypt_algorithms::block::{Aes, BlockCipher, CipherAlgorithm};
//!
//! let cipher = Aes::new(&[0u8; 16]).unwrap();
//! let mut block = [0u8; 16];
//! cipher.encrypt_block(&mut block).unwrap();
//! cipher.decrypt_block(&mut block).unwrap();
//! assert_eq!(block, [0u8; 16]);
//! ```

use tcrypt_api::KeySizes;
use tcrypt_internal::constant_time::ct_eq;

use crate::error::{Error, Result};

pub mod aes;
pub mod backends;
pub mod modes;

// Re-exports
pub use aes::Aes;
pub use backends::{Blowfish, Des, TripleDes};
#[cfg(feature = "all-ciphers")]
pub use backends::{Cast5, Rc2, Twofish};
pub use modes::{Cbc, Cfb, Ctr, CtrCounter, CounterEndianness, Ecb, F8, Lrw, Mode, ModeParams, ModeState, Ofb};

/// Keyed single-block permutation
///
/// Implementations own their expanded key schedule and wipe it on drop.
pub trait BlockCipher: Send + Sync {
    /// Registry name of the cipher
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

impl<B: BlockCipher + ?Sized> BlockCipher for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).decrypt_block(block)
    }
}

/// Constructor signature shared by every cipher, used by descriptors and by
/// modes that need to key a second instance (F8)
pub type SetupFn = fn(&[u8]) -> Result<Box<dyn BlockCipher>>;

/// A published single-block known-answer vector
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Key bytes
    pub key: &'static [u8],
    /// One block of plaintext
    pub plaintext: &'static [u8],
    /// Expected ciphertext block
    pub ciphertext: &'static [u8],
}

/// Compile-time properties of a concrete cipher type
pub trait CipherAlgorithm: BlockCipher + Sized + 'static {
    /// Registry name
    const NAME: &'static str;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Accepted key lengths in bytes
    const KEY_SIZES: KeySizes;

    /// Round count used with the default key size
    const DEFAULT_ROUNDS: usize;

    /// Known-answer vectors checked by [`CipherAlgorithm::self_test`]
    const TEST_VECTORS: &'static [KnownAnswer];

    /// Run the key schedule; fails when the key length is not in `KEY_SIZES`
    fn new(key: &[u8]) -> Result<Self>;

    /// Keyed instance behind the object-safe capability
    fn boxed(key: &[u8]) -> Result<Box<dyn BlockCipher>> {
        Ok(Box::new(Self::new(key)?))
    }

    /// Encrypt and decrypt every known-answer vector
    fn self_test() -> Result<()> {
        for kat in Self::TEST_VECTORS {
            let cipher = Self::new(kat.key)?;
            let mut block = kat.plaintext.to_vec();
            cipher.encrypt_block(&mut block)?;
            if !ct_eq(&block, kat.ciphertext) {
                return Err(Error::SelfTest { algorithm: Self::NAME });
            }
            cipher.decrypt_block(&mut block)?;
            if !ct_eq(&block, kat.plaintext) {
                return Err(Error::SelfTest { algorithm: Self::NAME });
            }
        }
        Ok(())
    }
}
