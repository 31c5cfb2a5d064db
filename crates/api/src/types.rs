//! Value types shared across the cipher stack
//!
//! These are small `Copy` descriptors used to configure descriptors and
//! sessions. None of them carry secret material.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction a session transforms data in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Plaintext in, ciphertext out
    #[default]
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

impl Direction {
    /// Lowercase name of the direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Padding policy applied at the end of a block-mode stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Padding {
    /// No padding; the stream must end on a block boundary for block modes
    None,
    /// PKCS#7: N bytes of value N, always at least one byte
    Pkcs7,
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::None => f.write_str("none"),
            Padding::Pkcs7 => f.write_str("pkcs7"),
        }
    }
}

/// Set of key lengths, in bytes, a cipher accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySizes {
    /// An explicit ascending list of lengths
    Fixed(&'static [usize]),
    /// Every length in `min..=max`
    Range {
        /// Smallest accepted length
        min: usize,
        /// Largest accepted length
        max: usize,
    },
}

impl KeySizes {
    /// Whether `len` is an accepted key length
    pub fn contains(&self, len: usize) -> bool {
        match self {
            KeySizes::Fixed(sizes) => sizes.contains(&len),
            KeySizes::Range { min, max } => (*min..=*max).contains(&len),
        }
    }

    /// Smallest accepted key length
    pub fn min(&self) -> usize {
        match self {
            KeySizes::Fixed(sizes) => sizes.iter().copied().min().unwrap_or(0),
            KeySizes::Range { min, .. } => *min,
        }
    }

    /// Largest accepted key length
    pub fn max(&self) -> usize {
        match self {
            KeySizes::Fixed(sizes) => sizes.iter().copied().max().unwrap_or(0),
            KeySizes::Range { max, .. } => *max,
        }
    }

    /// Largest accepted key length that is `<= len`
    pub fn largest_at_most(&self, len: usize) -> Option<usize> {
        match self {
            KeySizes::Fixed(sizes) => sizes.iter().copied().filter(|&s| s <= len).max(),
            KeySizes::Range { min, max } => {
                if len < *min {
                    None
                } else {
                    Some(len.min(*max))
                }
            }
        }
    }

    /// One representative length per size class, used by exhaustive tests
    pub fn representatives(&self) -> Vec<usize> {
        match self {
            KeySizes::Fixed(sizes) => sizes.to_vec(),
            KeySizes::Range { min, max } => {
                let mut v = vec![*min];
                if max > min {
                    v.push(*max);
                }
                v
            }
        }
    }
}

impl fmt::Display for KeySizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySizes::Fixed(sizes) => {
                for (i, s) in sizes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", s)?;
                }
                Ok(())
            }
            KeySizes::Range { min, max } => write!(f, "{}..={}", min, max),
        }
    }
}
