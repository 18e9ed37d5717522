//! HTTP controller endpoints for the admin API.
//!
//! Axum handlers for sign-in, uploads and dashboard reads. Controllers read the signed-in
//! admin from the tower-sessions session once per request and hand it to the services
//! explicitly. Each handler carries a utoipa OpenAPI annotation.

pub mod auth;
pub mod dashboard;
pub mod upload;
pub mod util;
