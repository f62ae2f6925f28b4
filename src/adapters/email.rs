//! Email validation backed by the `validator` crate.

use validator::ValidateEmail;

use crate::error::Result;
use crate::ports::EmailValidator;

/// HTML5 email check, as defined by `validator`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatorEmailValidator;

impl ValidatorEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for ValidatorEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let validator = ValidatorEmailValidator::new();

        assert!(validator.is_valid("example_@example.com").unwrap());
        assert!(validator.is_valid("valid_email@example.com").unwrap());
        assert!(validator.is_valid("first.last+tag@sub.example.org").unwrap());
    }

    #[test]
    fn test_invalid_emails() {
        let validator = ValidatorEmailValidator::new();

        assert!(!validator.is_valid("example.com").unwrap());
        assert!(!validator.is_valid("@example.com").unwrap());
        assert!(!validator.is_valid("user@").unwrap());
        assert!(!validator.is_valid("a b@example.com").unwrap());
    }
}
