pub mod prelude;

pub mod secrets_user;
