use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::admin::AdminDto, server::error::Error};

pub const SESSION_ADMIN_KEY: &str = "veerpreps:admin:session";

/// Signed-in staff member as stored in the session.
///
/// The bearer token issued by the backend doubles as identity and as the credential attached
/// to every metadata-creation call.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AdminSession {
    pub token: String,
    pub role: String,
    pub name: String,
}

impl AdminSession {
    pub fn to_dto(&self) -> AdminDto {
        AdminDto {
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

pub struct SessionAdmin;

impl SessionAdmin {
    /// Insert the signed-in admin into session, replacing any previous one
    pub async fn insert(session: &Session, admin: &AdminSession) -> Result<(), Error> {
        session.insert(SESSION_ADMIN_KEY, admin).await?;

        Ok(())
    }

    /// Get the signed-in admin from session
    pub async fn get(session: &Session) -> Result<Option<AdminSession>, Error> {
        let admin = session.get::<AdminSession>(SESSION_ADMIN_KEY).await?;

        Ok(admin)
    }

    /// Clear the session if an admin is signed in.
    ///
    /// Returns whether a signed-in admin was present.
    pub async fn clear(session: &Session) -> Result<bool, Error> {
        // Clearing a session that holds no data errors in the Redis store, so only clear
        // when there is actually an admin in it
        if Self::get(session).await?.is_none() {
            return Ok(false);
        }

        session.clear().await;

        Ok(true)
    }
}
