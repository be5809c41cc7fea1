//! Username & password registration and login.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    service::auth::password::{hash_password, verify_password},
};

pub struct CredentialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CredentialService<'a> {
    /// Creates a new instance of [`CredentialService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a password user and returns its ID
    ///
    /// The password is hashed with Argon2id before it is stored.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the newly created user
    /// - `Err(AuthError::UsernameTaken)` - Another user already has this username
    /// - `Err(Error::PasswordHashError)` - Hashing failed
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn register(&self, username: &str, password: &str) -> Result<i32, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()).into());
        }

        let password_hash = hash_password(password)?;

        // The unique index still guards against a concurrent registration of the same name
        match user_repo.create_with_password(username, &password_hash).await {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "Registered password user");

                Ok(user.id)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthError::UsernameTaken(username.to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Checks a username & password pair
    ///
    /// Unknown usernames, accounts without a password (Google-only users) and wrong passwords
    /// all yield `Ok(None)` so callers cannot tell them apart.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - ID of the authenticated user
    /// - `Ok(None)` - Credentials did not match any user
    /// - `Err(Error)` - Database query failed or the stored hash is malformed
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<i32>, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Ok(None);
        };

        let Some(password_hash) = user.password_hash.as_deref() else {
            return Ok(None);
        };

        if verify_password(password, password_hash)? {
            Ok(Some(user.id))
        } else {
            Ok(None)
        }
    }
}
