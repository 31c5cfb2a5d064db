//! Block ciphers backed by the RustCrypto cipher crates
//!
//! Each type validates the key length against its advertised sizes before
//! handing the key to the backend, then adapts `cipher::BlockEncrypt` /
//! `BlockDecrypt` to the object-safe [`BlockCipher`] capability.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use super::{BlockCipher, CipherAlgorithm, KnownAnswer};
use crate::error::{validate, Error, Result};
use tcrypt_api::KeySizes;
use tcrypt_params::utils::symmetric::*;

fn init<C: KeyInit>(name: &'static str, sizes: KeySizes, key: &[u8]) -> Result<C> {
    validate::key_size(name, key.len(), sizes)?;
    C::new_from_slice(key).map_err(|_| Error::KeySize {
        algorithm: name,
        actual: key.len(),
        supported: sizes,
    })
}

fn encrypt_with<C: BlockEncrypt>(cipher: &C, name: &'static str, bs: usize, block: &mut [u8]) -> Result<()> {
    validate::length(name, block.len(), bs)?;
    cipher.encrypt_block(GenericArray::from_mut_slice(block));
    Ok(())
}

fn decrypt_with<C: BlockDecrypt>(cipher: &C, name: &'static str, bs: usize, block: &mut [u8]) -> Result<()> {
    validate::length(name, block.len(), bs)?;
    cipher.decrypt_block(GenericArray::from_mut_slice(block));
    Ok(())
}

macro_rules! rustcrypto_cipher {
    (
        $(#[$meta:meta])*
        $name:ident, $inner:ty, $label:literal, $bs:expr, $sizes:expr, $rounds:expr, $kats:expr
    ) => {
        $(#[$meta])*
        pub struct $name($inner);

        impl BlockCipher for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn block_size(&self) -> usize {
                $bs
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                encrypt_with(&self.0, $label, $bs, block)
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                decrypt_with(&self.0, $label, $bs, block)
            }
        }

        impl CipherAlgorithm for $name {
            const NAME: &'static str = $label;
            const BLOCK_SIZE: usize = $bs;
            const KEY_SIZES: KeySizes = $sizes;
            const DEFAULT_ROUNDS: usize = $rounds;
            const TEST_VECTORS: &'static [KnownAnswer] = $kats;

            fn new(key: &[u8]) -> Result<Self> {
                Ok(Self(init::<$inner>($label, Self::KEY_SIZES, key)?))
            }
        }
    };
}

rustcrypto_cipher!(
    /// Single DES
    Des, des::Des, "des", DES_BLOCK_SIZE, KeySizes::Fixed(&[DES_KEY_SIZE]), 16, DES_VECTORS
);

rustcrypto_cipher!(
    /// Blowfish with a 64 to 448-bit key
    Blowfish,
    blowfish::Blowfish,
    "blowfish",
    BLOWFISH_BLOCK_SIZE,
    KeySizes::Range { min: BLOWFISH_MIN_KEY_SIZE, max: BLOWFISH_MAX_KEY_SIZE },
    16,
    BLOWFISH_VECTORS
);

#[cfg(feature = "all-ciphers")]
rustcrypto_cipher!(
    /// Twofish with a 128, 192 or 256-bit key
    Twofish,
    twofish::Twofish,
    "twofish",
    TWOFISH_BLOCK_SIZE,
    KeySizes::Fixed(TWOFISH_KEY_SIZES),
    16,
    TWOFISH_VECTORS
);

#[cfg(feature = "all-ciphers")]
rustcrypto_cipher!(
    /// CAST-128 (RFC 2144)
    Cast5,
    cast5::Cast5,
    "cast5",
    CAST5_BLOCK_SIZE,
    KeySizes::Range { min: CAST5_MIN_KEY_SIZE, max: CAST5_MAX_KEY_SIZE },
    16,
    CAST5_VECTORS
);

#[cfg(feature = "all-ciphers")]
rustcrypto_cipher!(
    /// RC2 with the effective key length equal to the key length
    Rc2,
    rc2::Rc2,
    "rc2",
    RC2_BLOCK_SIZE,
    KeySizes::Range { min: RC2_MIN_KEY_SIZE, max: RC2_MAX_KEY_SIZE },
    16,
    RC2_VECTORS
);

/// Triple DES in EDE form, two-key or three-key by key length
pub enum TripleDes {
    /// K1 K2 K1
    Ede2(des::TdesEde2),
    /// K1 K2 K3
    Ede3(des::TdesEde3),
}

impl BlockCipher for TripleDes {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            TripleDes::Ede2(c) => encrypt_with(c, Self::NAME, DES_BLOCK_SIZE, block),
            TripleDes::Ede3(c) => encrypt_with(c, Self::NAME, DES_BLOCK_SIZE, block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            TripleDes::Ede2(c) => decrypt_with(c, Self::NAME, DES_BLOCK_SIZE, block),
            TripleDes::Ede3(c) => decrypt_with(c, Self::NAME, DES_BLOCK_SIZE, block),
        }
    }
}

impl CipherAlgorithm for TripleDes {
    const NAME: &'static str = "des3";
    const BLOCK_SIZE: usize = DES_BLOCK_SIZE;
    const KEY_SIZES: KeySizes = KeySizes::Fixed(DES3_KEY_SIZES);
    const DEFAULT_ROUNDS: usize = 16;
    const TEST_VECTORS: &'static [KnownAnswer] = DES3_VECTORS;

    fn new(key: &[u8]) -> Result<Self> {
        validate::key_size(Self::NAME, key.len(), Self::KEY_SIZES)?;
        if key.len() == 16 {
            Ok(TripleDes::Ede2(init(Self::NAME, Self::KEY_SIZES, key)?))
        } else {
            Ok(TripleDes::Ede3(init(Self::NAME, Self::KEY_SIZES, key)?))
        }
    }
}

const DES_KAT_KEY: [u8; 8] = [0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1];
const DES_KAT_PT: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
const DES_KAT_CT: [u8; 8] = [0x85, 0xe8, 0x13, 0x54, 0x0f, 0x0a, 0xb4, 0x05];

const DES_VECTORS: &[KnownAnswer] = &[KnownAnswer {
    key: &DES_KAT_KEY,
    plaintext: &DES_KAT_PT,
    ciphertext: &DES_KAT_CT,
}];

// EDE with all subkeys equal degenerates to single DES
const DES3_VECTORS: &[KnownAnswer] = &[
    KnownAnswer {
        key: &[
            0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1, 0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc,
            0xdf, 0xf1,
        ],
        plaintext: &DES_KAT_PT,
        ciphertext: &DES_KAT_CT,
    },
    KnownAnswer {
        key: &[
            0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1, 0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc,
            0xdf, 0xf1, 0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1,
        ],
        plaintext: &DES_KAT_PT,
        ciphertext: &DES_KAT_CT,
    },
];

const BLOWFISH_VECTORS: &[KnownAnswer] = &[KnownAnswer {
    key: &[0u8; 8],
    plaintext: &[0u8; 8],
    ciphertext: &[0x4e, 0xf9, 0x97, 0x45, 0x61, 0x98, 0xdd, 0x78],
}];

#[cfg(feature = "all-ciphers")]
const TWOFISH_VECTORS: &[KnownAnswer] = &[KnownAnswer {
    key: &[0u8; 16],
    plaintext: &[0u8; 16],
    ciphertext: &[
        0x9f, 0x58, 0x9f, 0x5c, 0xf6, 0x12, 0x2c, 0x32, 0xb6, 0xbf, 0xec, 0x2f, 0x2a, 0xe8, 0xc3,
        0x5a,
    ],
}];

// RFC 2144 B.1, 128-bit key
#[cfg(feature = "all-ciphers")]
const CAST5_VECTORS: &[KnownAnswer] = &[KnownAnswer {
    key: &[
        0x01, 0x23, 0x45, 0x67, 0x12, 0x34, 0x56, 0x78, 0x23, 0x45, 0x67, 0x89, 0x34, 0x56, 0x78,
        0x9a,
    ],
    plaintext: &DES_KAT_PT,
    ciphertext: &[0x23, 0x8b, 0x4f, 0xe5, 0x84, 0x7e, 0x44, 0xb2],
}];

// RFC 2268, effective key length 64
#[cfg(feature = "all-ciphers")]
const RC2_VECTORS: &[KnownAnswer] = &[KnownAnswer {
    key: &[0xff; 8],
    plaintext: &[0xff; 8],
    ciphertext: &[0x27, 0x8b, 0x27, 0xe4, 0x2e, 0x2f, 0x0d, 0x49],
}];
