//! In-memory account storage.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::{Account, NewAccount};
use crate::error::{ApplicationError, Result};
use crate::ports::outbound::AccountRepository;

/// Keeps accounts in a map, keyed by a sequential identifier.
///
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryAccountRepository {
    next_id: AtomicU64,
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountRepository {
    /// Create a new empty [`MemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn find_by_id(&self, id: &str) -> Option<Account> {
        self.accounts.read().unwrap().get(id).cloned()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.accounts.read().unwrap().len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<Account> {
        let id = (self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string();
        let account = Account::from_new(id, account);

        self.accounts
            .write()
            .map_err(|err| ApplicationError::Repository(err.to_string()))?
            .insert(account.id.clone(), account.clone());

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_account(name: &str) -> NewAccount {
        NewAccount {
            name: name.into(),
            email: format!("{name}@mail.com"),
            password_hash: "hashed".into(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MemoryAccountRepository::new();

        let first = repo.create(new_account("a")).await.unwrap();
        let second = repo.create(new_account("b")).await.unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_id("2"), Some(second));
        assert_eq!(repo.find_by_id("3"), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = Arc::new(MemoryAccountRepository::new());

        let handles = (0..32)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(new_account(&format!("user{i}"))).await
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.len(), 32);
    }
}
