pub use super::secrets_user::Entity as SecretsUser;
