//! Account creation port.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{AccountModel, AddAccountModel};

/// Port for account creation.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account and return it with its identifier.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel>;
}
