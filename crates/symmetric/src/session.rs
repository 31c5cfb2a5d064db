//! Streaming cipher sessions
//!
//! A [`CipherSession`] binds a keyed cipher to a mode of operation and
//! streams data through it with [`update`](CipherSession::update) and
//! [`finish`](CipherSession::finish). Block-oriented modes buffer the
//! partial trailing block between calls; stream-oriented modes keep their
//! keystream position in the mode state and never buffer here.
//!
//! ```
//! use tcrypt_symmetric::{CipherOptions, CipherSession};
//!
//! let key = [0u8; 16];
//! let iv = [0u8; 16];
//! let opts = CipherOptions::new().mode("cbc").iv(&iv);
//!
//! let mut enc = CipherSession::new(&key, opts).unwrap();
//! let mut ct = enc.update(b"attack at dawn").unwrap();
//! ct.extend(enc.finish().unwrap());
//! assert_eq!(ct.len(), 16);
//!
//! let mut dec = CipherSession::new(&key, opts.decrypt()).unwrap();
//! let mut pt = dec.update(&ct).unwrap();
//! pt.extend(dec.finish().unwrap());
//! assert_eq!(pt, b"attack at dawn");
//! ```

use core::fmt;

use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::descriptor::CipherDescriptor;
use crate::error::{validate, validate_session_open, Error, Result, SymmetricResultExt};
use crate::options::CipherOptions;
use crate::registry::{registry, CipherRegistry};
use tcrypt_algorithms::{check_iv, new_mode, padding, Mode, ModeState};
use tcrypt_api::{Direction, Padding};
use tcrypt_common::SecretVec;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, no data seen yet
    Ready,
    /// At least one `update` has run
    Streaming,
    /// `finish` has run; the session accepts nothing further
    Finished,
}

/// A cipher and mode bound to a key, streaming data in one direction
pub struct CipherSession {
    descriptor: CipherDescriptor,
    mode: Mode,
    state: Box<dyn ModeState>,
    direction: Direction,
    padding: Padding,
    buffer: SecretVec,
    status: SessionState,
}

impl CipherSession {
    /// Build a session against the global registry
    pub fn new(key: &[u8], opts: CipherOptions<'_>) -> Result<Self> {
        Self::with_registry(registry(), key, opts)
    }

    /// Build a session resolving the cipher in `registry`
    ///
    /// Checks run in order: cipher name, mode name, key length, IV length,
    /// padding policy, then mode options (tweak, salt key, counter layout).
    pub fn with_registry(registry: &CipherRegistry, key: &[u8], opts: CipherOptions<'_>) -> Result<Self> {
        let descriptor = *registry.lookup(opts.cipher_name())?;
        let mode = Mode::from_name(opts.mode_name()).ok_or_else(|| Error::unknown_mode(opts.mode_name()))?;
        descriptor.check_key(key)?;

        let params = opts.mode_params();
        check_iv(mode, descriptor.block_size(), params.iv).map_primitive_err()?;

        let padding = opts.padding_override().unwrap_or_else(|| mode.default_padding());
        if mode.is_stream() && padding != Padding::None {
            return Err(Error::param(mode.label(), "stream modes do not take padding"));
        }

        let state = new_mode(mode, descriptor.setup_fn(), key, &params).map_primitive_err()?;
        let direction = opts.get_direction();

        debug!(
            cipher = descriptor.name(),
            mode = mode.name(),
            %direction,
            %padding,
            "cipher session created"
        );

        Ok(Self {
            descriptor,
            mode,
            state,
            direction,
            padding,
            buffer: SecretVec::with_capacity(descriptor.block_size() * 2),
            status: SessionState::Ready,
        })
    }

    /// Transform `data`, returning every byte that can be emitted so far
    pub fn update(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        validate_session_open(self.status == SessionState::Finished, "update")?;
        self.status = SessionState::Streaming;

        let mut out = if self.mode.is_stream() {
            Zeroizing::new(data.to_vec())
        } else {
            self.buffer.extend_from_slice(data);
            let ready = self.ready_len();
            Zeroizing::new(self.buffer.take_front(ready))
        };
        self.transform(&mut out)?;
        Ok(core::mem::take(&mut *out))
    }

    /// Flush the buffered tail through padding and the mode
    ///
    /// The session is finished afterwards even when this fails.
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        validate_session_open(self.status == SessionState::Finished, "finish")?;
        self.status = SessionState::Finished;
        trace!(
            cipher = self.descriptor.name(),
            mode = self.mode.name(),
            buffered = self.buffer.len(),
            "finishing cipher session"
        );

        if self.mode.is_stream() {
            return Ok(Vec::new());
        }

        let bs = self.block_size();
        let context = self.mode.label();
        let mut tail = Zeroizing::new(self.buffer.take_all());

        match (self.direction, self.padding) {
            (Direction::Encrypt, Padding::Pkcs7) => {
                padding::pad(&mut tail, bs).map_primitive_err_with(context)?;
                self.transform(&mut tail)?;
            }
            (Direction::Decrypt, Padding::Pkcs7) => {
                if tail.is_empty() {
                    return Err(Error::PaddingError { context });
                }
                validate::block_aligned(context, tail.len(), bs)?;
                self.transform(&mut tail)?;
                padding::unpad(&mut tail, bs).map_primitive_err_with(context)?;
            }
            (_, Padding::None) => {
                validate::block_aligned(context, tail.len(), bs)?;
                self.transform(&mut tail)?;
            }
        }
        Ok(core::mem::take(&mut *tail))
    }

    /// Name of the cipher
    pub fn cipher_name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Mode of operation
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Direction data is transformed in
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cipher block size in bytes
    pub fn block_size(&self) -> usize {
        self.descriptor.block_size()
    }

    /// Padding policy in effect
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Lifecycle state
    pub fn state(&self) -> SessionState {
        self.status
    }

    /// Current chaining value, counter, feedback register or tweak index
    pub fn iv(&self) -> &[u8] {
        self.state.iv()
    }

    /// Restart the message under a new IV
    ///
    /// Buffered bytes are discarded and the session returns to `Ready`.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        validate_session_open(self.status == SessionState::Finished, "set_iv")?;
        self.state.set_iv(iv).map_primitive_err()?;
        self.buffer.clear();
        self.status = SessionState::Ready;
        Ok(())
    }

    /// Bytes held back waiting for a full block
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    // Whole blocks that can leave the buffer now. With PKCS#7 on decrypt the
    // last full block stays behind so `finish` can strip its padding.
    fn ready_len(&self) -> usize {
        let bs = self.block_size();
        let buffered = self.buffer.len();
        let mut ready = buffered - buffered % bs;
        if self.direction == Direction::Decrypt && self.padding == Padding::Pkcs7 && ready == buffered && ready > 0 {
            ready -= bs;
        }
        ready
    }

    fn transform(&mut self, data: &mut Vec<u8>) -> Result<()> {
        let result = match self.direction {
            Direction::Encrypt => self.state.encrypt(data),
            Direction::Decrypt => self.state.decrypt(data),
        };
        if result.is_err() {
            data.zeroize();
        }
        result.map_primitive_err()
    }
}

impl fmt::Debug for CipherSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSession")
            .field("cipher", &self.descriptor.name())
            .field("mode", &self.mode)
            .field("direction", &self.direction)
            .field("padding", &self.padding)
            .field("buffered", &self.buffer.len())
            .field("state", &self.status)
            .finish()
    }
}
