//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. Swagger UI is
//! served at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{config::UPLOAD_BODY_LIMIT, controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Sign in with staff credentials
/// - `GET /api/auth/logout` - Clear the session and redirect to the login page
/// - `GET /api/auth/admin` - Get the signed-in admin
/// - `POST /api/upload/notes` - Upload a lecture note PDF
/// - `POST /api/upload/pyq` - Upload a previous-year question paper
/// - `POST /api/upload/video` - Link a YouTube video
/// - `POST /api/upload/branch` - Create a branch with a display image
/// - `GET /api/dashboard/upload-data` - Branches and subjects for the upload forms
/// - `GET /api/dashboard/branches` - All branches
/// - `GET /api/dashboard/stats` - Platform resource counts
///
/// The request body limit is raised to [`UPLOAD_BODY_LIMIT`] so PDFs fit in one request.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(&config)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "VeerPreps Admin", description = "VeerPreps admin API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Staff sign-in routes"),
        (name = controller::upload::UPLOAD_TAG, description = "Resource upload routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard read routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_admin))
        .routes(routes!(controller::upload::upload_note))
        .routes(routes!(controller::upload::upload_pyq))
        .routes(routes!(controller::upload::upload_video))
        .routes(routes!(controller::upload::create_branch))
        .routes(routes!(controller::dashboard::get_upload_data))
        .routes(routes!(controller::dashboard::get_branches))
        .routes(routes!(controller::dashboard::get_stats))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
