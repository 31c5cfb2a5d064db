//! Session options
//!
//! A borrowed builder carrying everything a session needs besides the key.
//! Unset fields fall back to the defaults in `tcrypt-params` and to the
//! mode's own padding policy.

use core::fmt;

use tcrypt_algorithms::{CtrCounter, ModeParams};
use tcrypt_api::{Direction, Padding};
use tcrypt_params::{DEFAULT_CIPHER, DEFAULT_MODE};

/// Options for constructing a [`CipherSession`](crate::CipherSession)
#[derive(Clone, Copy, Default)]
pub struct CipherOptions<'a> {
    cipher: Option<&'a str>,
    mode: Option<&'a str>,
    iv: Option<&'a [u8]>,
    direction: Direction,
    padding: Option<Padding>,
    tweak: Option<&'a [u8]>,
    salt_key: Option<&'a [u8]>,
    counter: CtrCounter,
}

impl<'a> CipherOptions<'a> {
    /// Options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the cipher by registry name
    pub fn cipher(mut self, name: &'a str) -> Self {
        self.cipher = Some(name);
        self
    }

    /// Select the mode by name
    pub fn mode(mut self, name: &'a str) -> Self {
        self.mode = Some(name);
        self
    }

    /// Set the IV, initial counter block or tweak index
    pub fn iv(mut self, iv: &'a [u8]) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Set the direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Shorthand for `direction(Direction::Encrypt)`
    pub fn encrypt(self) -> Self {
        self.direction(Direction::Encrypt)
    }

    /// Shorthand for `direction(Direction::Decrypt)`
    pub fn decrypt(self) -> Self {
        self.direction(Direction::Decrypt)
    }

    /// Override the mode's default padding
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the LRW tweak key
    pub fn tweak(mut self, tweak: &'a [u8]) -> Self {
        self.tweak = Some(tweak);
        self
    }

    /// Set the F8 salt key
    pub fn salt_key(mut self, salt_key: &'a [u8]) -> Self {
        self.salt_key = Some(salt_key);
        self
    }

    /// Set the CTR counter layout
    pub fn counter(mut self, counter: CtrCounter) -> Self {
        self.counter = counter;
        self
    }

    /// Cipher name, falling back to `DEFAULT_CIPHER`
    pub fn cipher_name(&self) -> &'a str {
        self.cipher.unwrap_or(DEFAULT_CIPHER)
    }

    /// Mode name, falling back to `DEFAULT_MODE`
    pub fn mode_name(&self) -> &'a str {
        self.mode.unwrap_or(DEFAULT_MODE)
    }

    /// The IV, if one was set
    pub fn iv_bytes(&self) -> Option<&'a [u8]> {
        self.iv
    }

    /// The direction
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Explicit padding, if one was chosen
    pub fn padding_override(&self) -> Option<Padding> {
        self.padding
    }

    /// Mode inputs besides the key
    pub fn mode_params(&self) -> ModeParams<'a> {
        ModeParams {
            iv: self.iv,
            tweak: self.tweak,
            salt_key: self.salt_key,
            counter: self.counter,
        }
    }
}

impl fmt::Debug for CipherOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherOptions")
            .field("cipher", &self.cipher_name())
            .field("mode", &self.mode_name())
            .field("iv_len", &self.iv.map(<[u8]>::len))
            .field("direction", &self.direction)
            .field("padding", &self.padding)
            .field("tweak", &self.tweak.map(|_| "<redacted>"))
            .field("salt_key", &self.salt_key.map(|_| "<redacted>"))
            .field("counter", &self.counter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CipherOptions::new();
        assert_eq!(opts.cipher_name(), "aes");
        assert_eq!(opts.mode_name(), "ecb");
        assert_eq!(opts.get_direction(), Direction::Encrypt);
        assert!(opts.iv_bytes().is_none());
        assert!(opts.padding_override().is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let iv = [1u8; 16];
        let tweak = [2u8; 16];
        let opts = CipherOptions::new()
            .cipher("blowfish")
            .mode("lrw")
            .iv(&iv)
            .decrypt()
            .padding(Padding::Pkcs7)
            .tweak(&tweak)
            .counter(CtrCounter::little_endian(4));

        assert_eq!(opts.cipher_name(), "blowfish");
        assert_eq!(opts.mode_name(), "lrw");
        assert_eq!(opts.get_direction(), Direction::Decrypt);
        assert_eq!(opts.padding_override(), Some(Padding::Pkcs7));

        let params = opts.mode_params();
        assert_eq!(params.iv, Some(&iv[..]));
        assert_eq!(params.tweak, Some(&tweak[..]));
        assert!(params.salt_key.is_none());
        assert_eq!(params.counter, CtrCounter::little_endian(4));
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let secret = [0xabu8; 16];
        let opts = CipherOptions::new().tweak(&secret).salt_key(&secret);
        let rendered = format!("{opts:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("171"));
    }
}
