//! Service layer for business logic.
//!
//! Services coordinate repositories and the Google client to implement registration, login,
//! and secret submission. Controllers call into services and translate the results into
//! session changes and responses.

pub mod auth;
pub mod user;
