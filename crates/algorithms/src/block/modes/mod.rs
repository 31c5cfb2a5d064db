//! Block cipher modes of operation
//!
//! This module implements ECB, CBC, CTR, CFB, OFB, LRW and F8 as stateful
//! transforms over any [`BlockCipher`]. Block-oriented modes (ECB, CBC, LRW)
//! accept whole blocks only; stream-oriented modes (CTR, CFB, OFB, F8) are
//! byte-granular and keep their keystream position between calls, so the
//! same output is produced whatever the chunking of the input.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BlockCipher, SetupFn};
use crate::error::{validate, Error, Result};
use tcrypt_api::Padding;

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod f8;
pub mod lrw;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::{CounterEndianness, Ctr, CtrCounter};
pub use ecb::Ecb;
pub use f8::F8;
pub use lrw::Lrw;
pub use ofb::Ofb;

/// Mode of operation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc,
    /// Counter
    Ctr,
    /// Full-block cipher feedback
    Cfb,
    /// Output feedback
    Ofb,
    /// Liskov-Rivest-Wagner tweakable mode
    Lrw,
    /// F8 (RFC 3711)
    F8,
}

impl Mode {
    /// Every mode, in registration order
    pub const ALL: [Mode; 7] = [
        Mode::Ecb,
        Mode::Cbc,
        Mode::Ctr,
        Mode::Cfb,
        Mode::Ofb,
        Mode::Lrw,
        Mode::F8,
    ];

    /// Lowercase registry name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Ctr => "ctr",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
            Mode::Lrw => "lrw",
            Mode::F8 => "f8",
        }
    }

    /// Uppercase label used as error context
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Ctr => "CTR",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
            Mode::Lrw => "LRW",
            Mode::F8 => "F8",
        }
    }

    /// Look a mode up by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Mode> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Whether the mode takes an IV (chaining value, counter or tweak index)
    pub fn requires_iv(&self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// IV length for a cipher with the given block size
    pub fn iv_len(&self, block_size: usize) -> usize {
        if self.requires_iv() {
            block_size
        } else {
            0
        }
    }

    /// Padding applied when the caller does not choose one
    pub fn default_padding(&self) -> Padding {
        match self {
            Mode::Ecb | Mode::Cbc => Padding::Pkcs7,
            _ => Padding::None,
        }
    }

    /// Whether the mode is byte-granular
    pub fn is_stream(&self) -> bool {
        matches!(self, Mode::Ctr | Mode::Cfb | Mode::Ofb | Mode::F8)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = tcrypt_api::Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Mode::from_name(s).ok_or_else(|| tcrypt_api::Error::unknown_mode(s))
    }
}

/// Running state of a mode bound to a keyed cipher
///
/// Block-oriented modes reject data that is not a whole number of blocks;
/// stream-oriented modes accept any length.
pub trait ModeState: Send {
    /// Which mode this state implements
    fn mode(&self) -> Mode;

    /// Block size of the underlying cipher
    fn block_size(&self) -> usize;

    /// Encrypt `data` in place, continuing from the current state
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()>;

    /// Decrypt `data` in place, continuing from the current state
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()>;

    /// Current chaining value, counter, feedback register or tweak index
    fn iv(&self) -> &[u8];

    /// Reset the state to a new IV
    fn set_iv(&mut self, iv: &[u8]) -> Result<()>;
}

/// Mode inputs besides the key
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeParams<'a> {
    /// IV, initial counter block or tweak index
    pub iv: Option<&'a [u8]>,
    /// LRW tweak key
    pub tweak: Option<&'a [u8]>,
    /// F8 salt key
    pub salt_key: Option<&'a [u8]>,
    /// CTR counter layout
    pub counter: CtrCounter,
}

/// Check the IV presence and length a mode expects
pub fn check_iv(mode: Mode, block_size: usize, iv: Option<&[u8]>) -> Result<()> {
    validate::iv_size(
        mode.label(),
        iv.map_or(0, <[u8]>::len),
        mode.iv_len(block_size),
    )
}

/// Build the running state of `mode` over a cipher keyed with `key`
///
/// `setup` keys the cipher; F8 calls it a second time with the masked key.
pub fn new_mode(mode: Mode, setup: SetupFn, key: &[u8], params: &ModeParams<'_>) -> Result<Box<dyn ModeState>> {
    let cipher = setup(key)?;
    let bs = cipher.block_size();
    check_iv(mode, bs, params.iv)?;
    let iv = params.iv.unwrap_or(&[]);

    let state: Box<dyn ModeState> = match mode {
        Mode::Ecb => Box::new(Ecb::new(cipher)),
        Mode::Cbc => Box::new(Cbc::new(cipher, iv)?),
        Mode::Ctr => Box::new(Ctr::with_counter(cipher, iv, params.counter)?),
        Mode::Cfb => Box::new(Cfb::new(cipher, iv)?),
        Mode::Ofb => Box::new(Ofb::new(cipher, iv)?),
        Mode::Lrw => {
            let tweak = params
                .tweak
                .ok_or_else(|| Error::param("tweak", "LRW requires a 16-byte tweak key"))?;
            Box::new(Lrw::new(cipher, iv, tweak)?)
        }
        Mode::F8 => {
            let salt = params
                .salt_key
                .ok_or_else(|| Error::param("salt_key", "F8 requires a salt key"))?;
            let masked = setup(&f8::mask_key(key, salt)?)?;
            Box::new(F8::new(cipher, masked, iv)?)
        }
    };
    Ok(state)
}

/// Apply `f` to each whole block of `data`
pub(crate) fn for_each_block<F>(data: &mut [u8], block_size: usize, context: &'static str, mut f: F) -> Result<()>
where
    F: FnMut(&mut [u8]) -> Result<()>,
{
    validate::block_aligned(context, data.len(), block_size)?;
    for block in data.chunks_exact_mut(block_size) {
        f(block)?;
    }
    Ok(())
}
