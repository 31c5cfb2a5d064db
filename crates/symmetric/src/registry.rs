//! The block cipher registry
//!
//! An explicit, enumerable table of cipher descriptors. The process-wide
//! instance is built once, on first use, from the name list in
//! `tcrypt-params`; names that cannot be registered are logged, recorded and
//! skipped so the rest stay available.

use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use crate::descriptor::{backend, CipherDescriptor};
use crate::error::{Error, Result};

/// Names the global registry is populated from
#[cfg(not(feature = "all-ciphers"))]
pub const REGISTRY_NAMES: &[&str] = tcrypt_params::CIPHER_NAMES;

/// Names the global registry is populated from
#[cfg(feature = "all-ciphers")]
pub const REGISTRY_NAMES: &[&str] = tcrypt_params::ALL_CIPHER_NAMES;

/// A name that failed to register, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCipher {
    /// Name that was attempted
    pub name: String,
    /// Why registration failed
    pub error: Error,
}

/// Table of registered cipher descriptors, in registration order
#[derive(Debug, Default, Clone)]
pub struct CipherRegistry {
    ciphers: Vec<CipherDescriptor>,
    skipped: Vec<SkippedCipher>,
}

impl CipherRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a name list, skipping names that fail
    pub fn populate(names: &[&str]) -> Self {
        let mut registry = Self::new();
        for &name in names {
            if let Err(error) = registry.register_name(name) {
                warn!(cipher = name, %error, "skipping cipher registration");
                registry.skipped.push(SkippedCipher {
                    name: name.to_string(),
                    error,
                });
            }
        }
        info!(
            registered = registry.ciphers.len(),
            skipped = registry.skipped.len(),
            "cipher registry populated"
        );
        registry
    }

    /// Add a descriptor; fails with `DuplicateCipher` if the name is taken
    pub fn register(&mut self, descriptor: CipherDescriptor) -> Result<()> {
        if self.contains(descriptor.name()) {
            return Err(Error::DuplicateCipher {
                name: descriptor.name().to_string(),
            });
        }
        debug!(cipher = descriptor.name(), "registered cipher");
        self.ciphers.push(descriptor);
        Ok(())
    }

    /// Register the compiled backend for `name`
    pub fn register_name(&mut self, name: &str) -> Result<()> {
        self.register(backend(name)?)
    }

    /// Find a descriptor by name, ignoring ASCII case
    pub fn lookup(&self, name: &str) -> Result<&CipherDescriptor> {
        self.ciphers
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_cipher(name))
    }

    /// Whether a cipher is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.ciphers.iter().map(CipherDescriptor::name).collect()
    }

    /// Registered descriptors, in registration order
    pub fn registered(&self) -> &[CipherDescriptor] {
        &self.ciphers
    }

    /// Names that failed to register during population
    pub fn skipped(&self) -> &[SkippedCipher] {
        &self.skipped
    }

    /// Number of registered ciphers
    pub fn len(&self) -> usize {
        self.ciphers.len()
    }

    /// Whether no cipher is registered
    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
    }

    /// Run every registered cipher's self test
    pub fn self_test_all(&self) -> Vec<(&'static str, Result<()>)> {
        self.ciphers.iter().map(|d| (d.name(), d.self_test())).collect()
    }
}

/// Global cipher registry
pub static REGISTRY: Lazy<CipherRegistry> = Lazy::new(|| CipherRegistry::populate(REGISTRY_NAMES));

/// The process-wide registry
pub fn registry() -> &'static CipherRegistry {
    &REGISTRY
}
