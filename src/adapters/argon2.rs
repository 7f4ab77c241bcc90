//! Argon2id password hasher implementation.

use argon2::password_hash::{PasswordHasher as _, SaltString};
use argon2::{Argon2, Params, Version};
use async_trait::async_trait;
use rand::rngs::OsRng;

use crate::config::Argon2 as ArgonConfig;
use crate::error::{ApplicationError, Result, ToInternal};
use crate::ports::outbound::Encryptor;

/// Argon2id encryptor adapter.
///
/// Produces PHC strings with a random salt for every call.
#[derive(Clone)]
pub struct Argon2Encryptor {
    params: Params,
}

impl Argon2Encryptor {
    /// Create a new [`Argon2Encryptor`] from configuration.
    pub fn new(config: &ArgonConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .map_err(|err| ApplicationError::HasherConfig(err.to_string()))?;

        Ok(Self { params })
    }

    fn hash_blocking(&self, plaintext: &str) -> Result<String> {
        let argon2 = Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        );
        let salt = SaltString::generate(&mut OsRng);

        let hash = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| ApplicationError::Hash(err.to_string()))?;

        Ok(hash.to_string())
    }
}

#[async_trait]
impl Encryptor for Argon2Encryptor {
    async fn hash(&self, plaintext: &str) -> Result<String> {
        let encryptor = self.clone();
        let plaintext = plaintext.to_owned();

        // Argon2 is CPU and memory bound.
        tokio::task::spawn_blocking(move || encryptor.hash_blocking(&plaintext))
            .await
            .catch()?
    }
}
