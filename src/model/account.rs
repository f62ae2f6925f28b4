use serde::{Deserialize, Serialize};

/// Account as returned by the account creation capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    /// Identifier assigned by the creator.
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Data forwarded to the account creation capability.
///
/// The password confirmation never leaves the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountModel {
    /// Attach an identifier and turn into a created [`AccountModel`].
    pub fn with_id(self, id: String) -> AccountModel {
        AccountModel {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
