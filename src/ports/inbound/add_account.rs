//! Account creation use case port.

use async_trait::async_trait;

use crate::domain::{Account, RegistrationInput};
use crate::error::Result;

/// Inbound port for account creation.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account from validated registration data.
    async fn add(&self, input: RegistrationInput) -> Result<Account>;
}
