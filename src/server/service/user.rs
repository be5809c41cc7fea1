use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{data::user::UserRepository, error::Error, model::db::UserModel};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?)
    }

    /// Get or create the user linked to the provided Google account ID
    ///
    /// If two logins for a new account race, the loser of the insert picks up the row the
    /// winner created.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the user that was found or created
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_or_create_google_user(&self, google_id: &str) -> Result<i32, Error> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_google_id(google_id).await? {
            return Ok(user.id);
        }

        match user_repo.create_with_google_id(google_id).await {
            Ok(user) => Ok(user.id),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                match user_repo.find_by_google_id(google_id).await? {
                    Some(user) => Ok(user.id),
                    None => Err(err.into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Stores `secret` on the user, replacing any previous one
    ///
    /// Returns `Ok(None)` if the user no longer exists.
    pub async fn submit_secret(
        &self,
        user_id: i32,
        secret: &str,
    ) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo.update_secret(user_id, secret).await?;

        if user.is_some() {
            tracing::debug!(user_id, "Stored secret");
        }

        Ok(user)
    }

    pub async fn get_secrets(&self) -> Result<Vec<String>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_secrets().await?)
    }
}
