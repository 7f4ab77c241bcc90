//! Account and registration value types.

use serde::{Deserialize, Serialize};

/// Data submitted to create an account, after presence validation.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    /// Plaintext password. Never logged.
    pub password: String,
}

impl RegistrationInput {
    /// Create a new [`RegistrationInput`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Account handed to storage, before it gets an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A stored account.
///
/// `password` always holds the hash returned by the encryptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    /// Attach an identifier to a [`NewAccount`].
    pub fn from_new(id: impl Into<String>, account: NewAccount) -> Self {
        Self {
            id: id.into(),
            name: account.name,
            email: account.email,
            password: account.password_hash,
        }
    }
}
