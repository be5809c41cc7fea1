//! Test fixture modules for database and HTTP mock creation.
//!
//! - `google` - Google token & userinfo endpoints
//! - `user` - User records for password and Google logins

pub mod google;
pub mod user;
