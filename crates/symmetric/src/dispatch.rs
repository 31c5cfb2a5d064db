//! Name-based construction of cipher sessions
//!
//! A single map from name to [`Constructor`] covers both kinds of name:
//! every cipher that registered successfully and every mode of operation.
//! A cipher constructor fixes the cipher and takes the mode from the
//! options; a mode constructor does the opposite. Both end in
//! [`CipherSession::new`], so validation is the same on either path.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::options::CipherOptions;
use crate::registry::registry;
use crate::session::CipherSession;
use tcrypt_algorithms::Mode;

/// A named way to build a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constructor {
    /// Session with this cipher; mode from the options (default ECB)
    Cipher(&'static str),
    /// Session with this mode; cipher from the options (default AES)
    Mode(Mode),
}

impl Constructor {
    /// Name the constructor is registered under
    pub fn name(&self) -> &'static str {
        match self {
            Constructor::Cipher(name) => *name,
            Constructor::Mode(mode) => mode.name(),
        }
    }

    /// Build a session
    pub fn build(&self, key: &[u8], opts: CipherOptions<'_>) -> Result<CipherSession> {
        match self {
            Constructor::Cipher(name) => by_cipher_name(name, key, opts),
            Constructor::Mode(mode) => by_mode_name(mode.name(), key, opts),
        }
    }
}

static ORDERED: Lazy<Vec<Constructor>> = Lazy::new(|| {
    let ciphers = registry().names().into_iter().map(Constructor::Cipher);
    let modes = tcrypt_params::MODE_NAMES
        .iter()
        .filter_map(|name| Mode::from_name(name))
        .map(Constructor::Mode);
    ciphers.chain(modes).collect()
});

static CONSTRUCTORS: Lazy<HashMap<&'static str, Constructor>> =
    Lazy::new(|| ORDERED.iter().map(|c| (c.name(), *c)).collect());

/// Build a session from options alone
pub fn new_cipher(key: &[u8], opts: CipherOptions<'_>) -> Result<CipherSession> {
    CipherSession::new(key, opts)
}

/// Build a session with the named cipher
pub fn by_cipher_name<'a>(name: &'a str, key: &[u8], opts: CipherOptions<'a>) -> Result<CipherSession> {
    CipherSession::new(key, opts.cipher(name))
}

/// Build a session with the named mode
pub fn by_mode_name<'a>(name: &'a str, key: &[u8], opts: CipherOptions<'a>) -> Result<CipherSession> {
    CipherSession::new(key, opts.mode(name))
}

/// Resolve a cipher or mode name
pub fn constructor(name: &str) -> Result<Constructor> {
    CONSTRUCTORS
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| Error::unknown_cipher(name))
}

/// Every constructor: registered ciphers first, then modes
pub fn constructors() -> &'static [Constructor] {
    &ORDERED
}

/// Encrypt `data` in one call
pub fn encrypt(key: &[u8], opts: CipherOptions<'_>, data: &[u8]) -> Result<Vec<u8>> {
    run(key, opts.encrypt(), data)
}

/// Decrypt `data` in one call
pub fn decrypt(key: &[u8], opts: CipherOptions<'_>, data: &[u8]) -> Result<Vec<u8>> {
    run(key, opts.decrypt(), data)
}

fn run(key: &[u8], opts: CipherOptions<'_>, data: &[u8]) -> Result<Vec<u8>> {
    let mut session = CipherSession::new(key, opts)?;
    let mut out = session.update(data)?;
    out.extend(session.finish()?);
    Ok(out)
}
