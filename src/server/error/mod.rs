//! Error types for the admin server.
//!
//! Domain errors (authentication, validation, upstream calls, configuration) are grouped into
//! a single `Error` type. All errors implement `IntoResponse` so handlers can return them with
//! `?`, and use `thiserror` for their `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod upstream;
pub mod validation;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, upstream::UpstreamError,
        validation::ValidationError,
    },
};

/// Main error type for the admin server.
///
/// Aggregates the domain-specific errors and external library errors so the `?` operator can
/// be used throughout controllers and services. The `IntoResponse` implementation decides what
/// the client gets to see.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (failed sign-in, missing session).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A submitted form is missing fields or carries malformed values.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Object storage or backend API call failed.
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// Malformed multipart request body.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed multipart bodies
/// - 401 Unauthorized - Failed sign-in or no active session
/// - 502 Bad Gateway - Object storage or backend failures, with the upstream message
/// - 500 Internal Server Error - Everything else (logged, generic message to the client)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::UpstreamError(err) => err.into_response(),
            Self::MultipartError(err) => (
                err.status(),
                Json(ErrorDto {
                    error: err.body_text(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged in full while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
