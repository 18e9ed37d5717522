use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        resource::{BranchListDto, StatsResponseDto, UploadDataResponseDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::admin::SessionAdmin},
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get branches and subjects for the upload forms
#[utoipa::path(
    get,
    path = "/api/dashboard/upload-data",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Branches and subjects", body = UploadDataResponseDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Backend failure", body = ErrorDto)
    ),
)]
pub async fn get_upload_data(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = SessionAdmin::get(&session).await?;

    let data = DashboardService::new(&state.backend)
        .upload_data(admin.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(data)))
}

/// Get all branches
#[utoipa::path(
    get,
    path = "/api/dashboard/branches",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Branch list", body = BranchListDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Backend failure", body = ErrorDto)
    ),
)]
pub async fn get_branches(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = SessionAdmin::get(&session).await?;

    let branches = DashboardService::new(&state.backend)
        .branches(admin.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(branches)))
}

/// Get platform resource counts
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Resource counts", body = StatsResponseDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Backend failure", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = SessionAdmin::get(&session).await?;

    let stats = DashboardService::new(&state.backend)
        .stats(admin.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
