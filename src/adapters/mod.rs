//! Default implementations of the controller ports.

pub mod email;
pub mod memory;

pub use email::ValidatorEmailValidator;
pub use memory::InMemoryAccounts;
