//! Email format check.

use validator::ValidateEmail;

use crate::ports::outbound::EmailValidator;

/// Email validator backed by the `validator` crate, the same check as
/// `#[validate(email)]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardEmailValidator;

impl StandardEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for StandardEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}
