//! Authentication service layer.
//!
//! Password registration and verification, plus completion of the Google login flow.

pub mod callback;
pub mod credential;
pub mod password;
