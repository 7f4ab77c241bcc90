//! Account creation use case implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Account, NewAccount, RegistrationInput};
use crate::error::{ApplicationError, Result};
use crate::ports::inbound::AddAccount;
use crate::ports::outbound::{AccountRepository, Encryptor};

/// Account creation use case service.
pub struct AddAccountUseCase {
    encryptor: Arc<dyn Encryptor>,
    account_repo: Arc<dyn AccountRepository>,
}

impl AddAccountUseCase {
    pub fn new(
        encryptor: Arc<dyn Encryptor>,
        account_repo: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            encryptor,
            account_repo,
        }
    }
}

#[async_trait]
impl AddAccount for AddAccountUseCase {
    async fn add(&self, input: RegistrationInput) -> Result<Account> {
        let password_hash = self.encryptor.hash(&input.password).await?;

        if password_hash == input.password {
            return Err(ApplicationError::UnhashedPassword);
        }

        let account = self
            .account_repo
            .create(NewAccount {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id, "account created");

        Ok(account)
    }
}
