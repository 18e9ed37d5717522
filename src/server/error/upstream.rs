use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure of a call leaving this service.
///
/// Unlike sign-in failures, the underlying message is passed through to the client so staff
/// can act on it.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0}")]
    Storage(String),
    #[error("{0}")]
    Backend(String),
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(message) => tracing::error!(error = %message, "Object storage upload failed"),
            Self::Backend(message) => tracing::error!(error = %message, "Backend request failed"),
        }

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
