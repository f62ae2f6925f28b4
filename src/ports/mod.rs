//! These traits define what the controller needs from the outside world.

pub mod account;
pub mod email;

pub use account::*;
pub use email::*;
