//! Type-safe session management wrapper.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the operations the
//! auth flow needs, so session keys and value types live in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Stores the logged-in user's id and handles the session lifecycle on login and
/// logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id after a successful login or registration.
    ///
    /// The session id is cycled first so a session id issued before login can not be
    /// reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored under a fresh session id
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session store
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
