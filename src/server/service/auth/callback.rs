//! Completion of the Google login flow.

use sea_orm::DatabaseConnection;

use crate::server::{error::Error, google::GoogleClient, service::user::UserService};

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    google: &'a GoogleClient,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(db: &'a DatabaseConnection, google: &'a GoogleClient) -> Self {
        Self { db, google }
    }

    /// Exchanges the authorization code and resolves the Google account to a local user
    ///
    /// The first login with a Google account creates the user; later logins return the same
    /// user.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the user to log in
    /// - `Err(Error::OAuthError)` - Code exchange or profile lookup failed
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn handle_callback(&self, code: &str) -> Result<i32, Error> {
        let profile = self.google.get_profile(code).await?;

        let user_service = UserService::new(self.db);
        let user_id = user_service.get_or_create_google_user(&profile.sub).await?;

        tracing::debug!(user_id, "Google login completed");

        Ok(user_id)
    }
}
