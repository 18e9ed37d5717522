use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// One or more required fields were absent or blank, carries the form's own message
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Invalid subject ID: {0:?}")]
    InvalidSubjectId(String),
    #[error("Invalid exam type {0:?}, expected MID or END")]
    InvalidExamType(String),
    #[error("Please enter a valid YouTube URL.")]
    InvalidVideoLink,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected submission: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
