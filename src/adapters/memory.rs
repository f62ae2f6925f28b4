//! Process-local account store.
//!
//! Accounts vanish with the process. Meant for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::OsRng;
use tokio::sync::RwLock;

use crate::error::{ApplicationError, Result};
use crate::model::{AccountModel, AddAccountModel};
use crate::ports::AddAccount;

pub const DEFAULT_ID_LENGTH: usize = 24;

/// Accounts indexed by email.
#[derive(Debug)]
pub struct InMemoryAccounts {
    accounts: RwLock<HashMap<String, AccountModel>>,
    id_length: usize,
}

impl InMemoryAccounts {
    pub fn new(id_length: usize) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            id_length,
        }
    }
}

#[cfg(test)]
impl InMemoryAccounts {
    /// Account registered with `email`, if any.
    async fn find_by_email(&self, email: &str) -> Option<AccountModel> {
        self.accounts.read().await.get(email).cloned()
    }

    async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Default for InMemoryAccounts {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

#[async_trait]
impl AddAccount for InMemoryAccounts {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(ApplicationError::EmailAlreadyUsed);
        }

        let id = Alphanumeric.sample_string(&mut OsRng, self.id_length);
        let account = account.with_id(id);
        accounts.insert(account.email.clone(), account.clone());

        Ok(account)
    }
}
