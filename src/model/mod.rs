//! Data exchanged between the HTTP layer, the controller and its
//! collaborators.

pub mod account;
pub mod body;
pub mod error;
pub mod response;

pub use account::{AccountModel, AddAccountModel};
pub use body::{HttpRequest, SignUpBody};
pub use error::HttpError;
pub use response::{HttpBody, HttpResponse};
