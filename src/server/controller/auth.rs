use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{AdminDto, LoginDto},
        api::ErrorDto,
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::admin::SessionAdmin},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with staff credentials
///
/// Exchanges the credentials with the backend and stores the resulting session. The session
/// ID is cycled on success.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AdminDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = AuthService::new(&state.backend)
        .sign_in(&credentials.email, &credentials.password)
        .await?;

    session.cycle_id().await?;
    SessionAdmin::insert(&session, &admin).await?;

    tracing::info!(name = %admin.name, role = %admin.role, "Admin signed in");

    Ok((StatusCode::OK, Json(admin.to_dto())))
}

/// Sign out by clearing the session
///
/// # Responses
/// - 307 (Temporary Redirect): Redirect to the login page, whether or not anyone was signed in
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if SessionAdmin::clear(&session).await? {
        tracing::info!("Admin signed out");
    }

    Ok(Redirect::temporary("/login"))
}

/// Get the signed-in admin
#[utoipa::path(
    get,
    path = "/api/auth/admin",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in admin", body = AdminDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin(session: Session) -> Result<impl IntoResponse, Error> {
    let Some(admin) = SessionAdmin::get(&session).await? else {
        return Err(AuthError::MissingAccessToken.into());
    };

    Ok((StatusCode::OK, Json(admin.to_dto())))
}
