//! Cipher descriptors: the immutable registry entries
//!
//! A descriptor names a cipher and carries its block size, accepted key
//! sizes, default round count and the two capabilities the registry needs:
//! keying an instance and running the known-answer self test.

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result, SymmetricResultExt};
use tcrypt_algorithms::block::{Aes, BlockCipher, Blowfish, CipherAlgorithm, Des, SetupFn, TripleDes};
#[cfg(feature = "all-ciphers")]
use tcrypt_algorithms::block::{Cast5, Rc2, Twofish};
use tcrypt_api::KeySizes;

/// Self-test capability of a descriptor
pub type SelfTestFn = fn() -> tcrypt_algorithms::Result<()>;

/// Process-wide description of a block cipher
#[derive(Clone, Copy)]
pub struct CipherDescriptor {
    name: &'static str,
    block_size: usize,
    key_sizes: KeySizes,
    default_rounds: usize,
    setup: SetupFn,
    self_test: SelfTestFn,
}

impl CipherDescriptor {
    /// Describe a cipher from explicit parts
    pub const fn new(
        name: &'static str,
        block_size: usize,
        key_sizes: KeySizes,
        default_rounds: usize,
        setup: SetupFn,
        self_test: SelfTestFn,
    ) -> Self {
        Self {
            name,
            block_size,
            key_sizes,
            default_rounds,
            setup,
            self_test,
        }
    }

    /// Describe a cipher type from its compile-time properties
    pub fn of<C: CipherAlgorithm>() -> Self {
        Self::new(
            C::NAME,
            C::BLOCK_SIZE,
            C::KEY_SIZES,
            C::DEFAULT_ROUNDS,
            C::boxed,
            C::self_test,
        )
    }

    /// Registry name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Accepted key lengths
    pub fn key_sizes(&self) -> KeySizes {
        self.key_sizes
    }

    /// Smallest accepted key length in bytes
    pub fn min_key_size(&self) -> usize {
        self.key_sizes.min()
    }

    /// Largest accepted key length in bytes
    pub fn max_key_size(&self) -> usize {
        self.key_sizes.max()
    }

    /// Round count at the default key size
    pub fn default_rounds(&self) -> usize {
        self.default_rounds
    }

    /// Largest accepted key length that does not exceed `len`
    ///
    /// Fails with `InvalidKeySize` when `len` is below the smallest size.
    pub fn key_size(&self, len: usize) -> Result<usize> {
        self.key_sizes
            .largest_at_most(len)
            .ok_or_else(|| Error::InvalidKeySize {
                context: self.name,
                actual: len,
                supported: self.key_sizes.to_string(),
            })
    }

    /// Check a key length without running the key schedule
    pub fn check_key(&self, key: &[u8]) -> Result<()> {
        validate::key_size(self.name, key.len(), &self.key_sizes)
    }

    /// Run the key schedule and return a keyed instance
    pub fn setup(&self, key: &[u8]) -> Result<Box<dyn BlockCipher>> {
        self.check_key(key)?;
        (self.setup)(key).map_primitive_err()
    }

    /// The raw keying capability, for modes that key a second instance
    pub fn setup_fn(&self) -> SetupFn {
        self.setup
    }

    /// Run the cipher's known-answer vectors
    pub fn self_test(&self) -> Result<()> {
        (self.self_test)().map_primitive_err()
    }

    /// Random key of the largest accepted size
    pub fn generate_key<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Zeroizing<Vec<u8>> {
        let mut key = Zeroizing::new(vec![0u8; self.max_key_size()]);
        rng.fill_bytes(&mut key);
        key
    }

    /// Random IV of one block
    pub fn generate_iv<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Vec<u8> {
        let mut iv = vec![0u8; self.block_size];
        rng.fill_bytes(&mut iv);
        iv
    }
}

impl fmt::Debug for CipherDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherDescriptor")
            .field("name", &self.name)
            .field("block_size", &self.block_size)
            .field("key_sizes", &self.key_sizes)
            .field("default_rounds", &self.default_rounds)
            .finish()
    }
}

/// Descriptor of the compiled backend for `name`
///
/// Fails with `UnsupportedBackend` when the name is known to the full cipher
/// list but no implementation is compiled in.
pub fn backend(name: &str) -> Result<CipherDescriptor> {
    let descriptor = match name {
        "aes" => CipherDescriptor::of::<Aes>(),
        "des" => CipherDescriptor::of::<Des>(),
        "des3" => CipherDescriptor::of::<TripleDes>(),
        "blowfish" => CipherDescriptor::of::<Blowfish>(),
        #[cfg(feature = "all-ciphers")]
        "twofish" => CipherDescriptor::of::<Twofish>(),
        #[cfg(feature = "all-ciphers")]
        "cast5" => CipherDescriptor::of::<Cast5>(),
        #[cfg(feature = "all-ciphers")]
        "rc2" => CipherDescriptor::of::<Rc2>(),
        _ => {
            return Err(Error::UnsupportedBackend {
                name: name.to_string(),
            })
        }
    };
    Ok(descriptor)
}
