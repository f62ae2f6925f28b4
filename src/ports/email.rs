//! Email validation port.

use crate::error::Result;

/// Port for checking an email address.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is an acceptable address.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the check itself could not be performed.
    fn is_valid(&self, email: &str) -> Result<bool>;
}
