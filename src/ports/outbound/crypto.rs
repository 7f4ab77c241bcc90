//! Interfaces for cryptographic operations.

use async_trait::async_trait;

use crate::error::Result;

/// Port for password hashing.
///
/// The returned string is opaque to callers.
#[async_trait]
pub trait Encryptor: Send + Sync {
    /// Hash a plaintext secret.
    async fn hash(&self, plaintext: &str) -> Result<String>;
}
