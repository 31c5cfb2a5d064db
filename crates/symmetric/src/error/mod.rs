//! Error handling for cipher sessions and the dispatch layer
//!
//! Re-exports the API error system and adds the conversion from primitive
//! (mode and cipher level) failures.

// Re-export the primary API error system
pub use tcrypt_api::error::{validate, Error, Result};

use tcrypt_algorithms::error::{to_core_result, Error as PrimitiveError};

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a primitive result to an API result
    fn map_primitive_err(self) -> Result<T>;

    /// Convert a primitive result to an API result under `context`
    fn map_primitive_err_with(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(Error::from)
    }

    fn map_primitive_err_with(self, context: &'static str) -> Result<T> {
        to_core_result(self, context)
    }
}

/// Fail with `SessionFinished` once a session has been finished
pub fn validate_session_open(finished: bool, operation: &'static str) -> Result<()> {
    if finished {
        return Err(Error::SessionFinished { operation });
    }
    Ok(())
}
