//! Cipher and mode name lists

/// Cipher used when a session does not name one
pub const DEFAULT_CIPHER: &str = "aes";

/// Mode used when a session does not name one
pub const DEFAULT_MODE: &str = "ecb";

/// Ciphers registered by default
///
/// libtomcrypt defaults to `aes blowfish des`. `des3` is added here because
/// the DES backend crate provides it at no extra cost.
pub const CIPHER_NAMES: &[&str] = &["aes", "blowfish", "des", "des3"];

/// The full cipher name list registered with the `all-ciphers` feature
///
/// Names without a compiled backend are skipped at registration.
pub const ALL_CIPHER_NAMES: &[&str] = &[
    "aes", "anubis", "blowfish", "cast5", "des", "des3", "kasumi", "khazad", "kseed", "noekeon",
    "rc2", "rc5", "rc6", "saferp", "twofish", "xtea",
];

/// Modes of operation, in registration order
pub const MODE_NAMES: &[&str] = &["ecb", "cbc", "ctr", "cfb", "ofb", "lrw", "f8"];
