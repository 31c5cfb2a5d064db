//! Constants for block cipher algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES key sizes in bytes
pub const AES_KEY_SIZES: &[usize] = &[AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

/// Triple-DES key sizes in bytes (two-key and three-key EDE)
pub const DES3_KEY_SIZES: &[usize] = &[16, 24];

/// Blowfish block size in bytes
pub const BLOWFISH_BLOCK_SIZE: usize = 8;

/// Smallest Blowfish key in bytes
pub const BLOWFISH_MIN_KEY_SIZE: usize = 8;

/// Largest Blowfish key in bytes
pub const BLOWFISH_MAX_KEY_SIZE: usize = 56;

/// Twofish block size in bytes
pub const TWOFISH_BLOCK_SIZE: usize = 16;

/// Twofish key sizes in bytes
pub const TWOFISH_KEY_SIZES: &[usize] = &[16, 24, 32];

/// CAST5 block size in bytes
pub const CAST5_BLOCK_SIZE: usize = 8;

/// Smallest CAST5 key in bytes
pub const CAST5_MIN_KEY_SIZE: usize = 5;

/// Largest CAST5 key in bytes
pub const CAST5_MAX_KEY_SIZE: usize = 16;

/// RC2 block size in bytes
pub const RC2_BLOCK_SIZE: usize = 8;

/// Smallest RC2 key in bytes
pub const RC2_MIN_KEY_SIZE: usize = 8;

/// Largest RC2 key in bytes
pub const RC2_MAX_KEY_SIZE: usize = 128;

/// LRW tweak key size in bytes
pub const LRW_TWEAK_SIZE: usize = 16;

/// F8 filler byte for the masked key
pub const F8_SALT_FILLER: u8 = 0x55;
