//! Database model type aliases for test utilities.
//!
//! Matches the aliases in the main crate so fixtures and tests agree on types.

/// Type alias for the user database model.
pub type UserModel = entity::secrets_user::Model;
