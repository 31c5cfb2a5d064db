//! Shared helpers for the tcrypt integration tests
//!
//! Builds the options each mode needs and drives sessions in chunks, so the
//! test files can iterate over ciphers and modes without repeating setup.

use tcrypt_api::Result;
use tcrypt_params::utils::symmetric::LRW_TWEAK_SIZE;
use tcrypt_symmetric::{CipherDescriptor, CipherOptions, CipherSession, Mode};

/// Tweak key used for LRW sessions
pub static TWEAK: [u8; LRW_TWEAK_SIZE] = [0x5c; LRW_TWEAK_SIZE];

/// Salt used for F8 sessions, truncated to the key length
pub static SALT: [u8; 14] = [0xa5; 14];

/// Whether `mode` can run over `descriptor`'s cipher
pub fn supports(descriptor: &CipherDescriptor, mode: Mode) -> bool {
    mode != Mode::Lrw || descriptor.block_size() == 16
}

/// Options selecting `cipher` and `mode` with every input the mode requires
pub fn mode_options<'a>(cipher: &'a str, mode: Mode, iv: &'a [u8], key_len: usize) -> CipherOptions<'a> {
    let opts = CipherOptions::new().cipher(cipher).mode(mode.name());
    match mode {
        Mode::Ecb => opts,
        Mode::Lrw => opts.iv(iv).tweak(&TWEAK),
        Mode::F8 => opts.iv(iv).salt_key(&SALT[..key_len.min(SALT.len())]),
        _ => opts.iv(iv),
    }
}

/// Run one session over `data`, feeding it `chunk` bytes at a time
pub fn stream(key: &[u8], opts: CipherOptions<'_>, data: &[u8], chunk: usize) -> Result<Vec<u8>> {
    let mut session = CipherSession::new(key, opts)?;
    let mut out = Vec::with_capacity(data.len() + session.block_size());
    for piece in data.chunks(chunk.max(1)) {
        out.extend(session.update(piece)?);
    }
    out.extend(session.finish()?);
    Ok(out)
}

/// Deterministic filler bytes
pub fn patterned(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect()
}
