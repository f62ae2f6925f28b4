//! HTTP handlers.

pub mod signup;
