use crate::server::{
    client::backend::BackendClient,
    error::{auth::AuthError, Error},
    model::session::admin::AdminSession,
};

/// Exchanges staff credentials with the backend for a session.
pub struct AuthService<'a> {
    backend: &'a BackendClient,
}

impl<'a> AuthService<'a> {
    pub fn new(backend: &'a BackendClient) -> Self {
        Self { backend }
    }

    /// Signs a staff member in against the backend.
    ///
    /// Makes at most one sign-in request. Blank credentials are rejected without calling the
    /// backend. Whatever goes wrong (transport error, non-success status, missing token) the
    /// caller only ever sees `AuthError::InvalidCredentials`, the cause is logged at debug.
    ///
    /// # Arguments
    /// - `email` - Staff email address
    /// - `password` - Staff password
    ///
    /// # Returns
    /// - `Ok(AdminSession)` - Backend issued a token, ready to be stored in the session
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Sign-in failed for any reason
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession, Error> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            tracing::debug!("Sign-in rejected: blank email or password");

            return Err(AuthError::InvalidCredentials.into());
        }

        let response = match self.backend.sign_in(email, password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "Sign-in rejected by backend");

                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let Some(token) = response.token.filter(|token| !token.is_empty()) else {
            tracing::debug!(
                message = ?response.message,
                "Sign-in response did not include a token"
            );

            return Err(AuthError::InvalidCredentials.into());
        };

        Ok(AdminSession {
            token,
            role: response.role.unwrap_or_default(),
            name: response.name.unwrap_or_default(),
        })
    }
}
