//! Account repository port.

use async_trait::async_trait;

use crate::domain::{Account, NewAccount};
use crate::error::Result;

/// Port for account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account and return it with its identifier.
    async fn create(&self, account: NewAccount) -> Result<Account>;
}
