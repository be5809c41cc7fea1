use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user who logs in with a username & password
    ///
    /// Fails with a unique constraint violation if the username is already taken.
    pub async fn create_with_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserModel, DbErr> {
        let user = entity::secrets_user::ActiveModel {
            username: ActiveValue::Set(Some(username.to_string())),
            password_hash: ActiveValue::Set(Some(password_hash.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Creates a user who logs in with Google
    ///
    /// Fails with a unique constraint violation if the Google ID already belongs to a user.
    pub async fn create_with_google_id(&self, google_id: &str) -> Result<UserModel, DbErr> {
        let user = entity::secrets_user::ActiveModel {
            google_id: ActiveValue::Set(Some(google_id.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::SecretsUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::SecretsUser::find()
            .filter(entity::secrets_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_by_google_id(&self, google_id: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::SecretsUser::find()
            .filter(entity::secrets_user::Column::GoogleId.eq(google_id))
            .one(self.db)
            .await
    }

    /// Replaces the secret of a user
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn update_secret(
        &self,
        user_id: i32,
        secret: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        let Some(user) = entity::prelude::SecretsUser::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.secret = ActiveValue::Set(Some(secret.to_string()));

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Gets every stored secret, oldest user first, without any owner information
    pub async fn get_secrets(&self) -> Result<Vec<String>, DbErr> {
        let users = entity::prelude::SecretsUser::find()
            .filter(entity::secrets_user::Column::Secret.is_not_null())
            .order_by_asc(entity::secrets_user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().filter_map(|user| user.secret).collect())
    }
}
