//! User record fixtures.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user who logs in with a username & password.
    ///
    /// The hash is stored as given; tests that log in must pass a real Argon2 PHC string.
    pub async fn insert_password_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserModel, TestError> {
        self.insert(entity::secrets_user::ActiveModel {
            username: ActiveValue::Set(Some(username.to_string())),
            password_hash: ActiveValue::Set(Some(password_hash.to_string())),
            ..Default::default()
        })
        .await
    }

    /// Insert a user linked to a Google account.
    pub async fn insert_google_user(&self, google_id: &str) -> Result<UserModel, TestError> {
        self.insert(entity::secrets_user::ActiveModel {
            google_id: ActiveValue::Set(Some(google_id.to_string())),
            ..Default::default()
        })
        .await
    }

    /// Insert a password user who has already submitted a secret.
    pub async fn insert_user_with_secret(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<UserModel, TestError> {
        self.insert(entity::secrets_user::ActiveModel {
            username: ActiveValue::Set(Some(username.to_string())),
            password_hash: ActiveValue::Set(Some("hash".to_string())),
            secret: ActiveValue::Set(Some(secret.to_string())),
            ..Default::default()
        })
        .await
    }

    async fn insert(
        &self,
        mut user: entity::secrets_user::ActiveModel,
    ) -> Result<UserModel, TestError> {
        user.created_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(entity::prelude::SecretsUser::insert(user)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
