//! Logged in user session data.
//!
//! A session is Authenticated while it holds a user ID under [`SESSION_USER_ID_KEY`] and
//! Anonymous otherwise. The ID is written on every successful login and removed with the rest
//! of the session on logout.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for storing the logged in user's ID.
pub const SESSION_USER_ID_KEY: &str = "secrets:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Marks the session as logged in as `user_id`, replacing any previous user.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Returns the logged in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Session is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(Error::ParseError)` - The stored value is not a user ID
    /// - `Err(Error::SessionError)` - Session retrieval failed
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let Some(SessionUserId(raw_id)) = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
        else {
            return Ok(None);
        };

        let user_id = raw_id.parse::<i32>().map_err(|e| {
            Error::ParseError(format!("Invalid user ID {:?} in session: {}", raw_id, e))
        })?;

        Ok(Some(user_id))
    }
}
