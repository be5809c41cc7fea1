//! Database model type aliases.
//!
//! Saves importing from the generated `entity` crate in every signature.

/// Type alias for the user database model.
///
/// # Fields (from `entity::secrets_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Login name for password users, `None` for Google-only users
/// - `password_hash` - Argon2id PHC string for password users
/// - `google_id` - Google account `sub` for federated users
/// - `secret` - The user's submitted secret, if any
/// - `created_at` - Timestamp when the user was created
pub type UserModel = entity::secrets_user::Model;
