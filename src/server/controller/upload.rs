use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        resource::{BranchResultDto, UploadResultDto, VideoLinkDto},
    },
    server::{
        controller::util::multipart::read_multipart,
        error::Error,
        model::{
            app::AppState,
            session::admin::SessionAdmin,
            upload::{BranchForm, NoteForm, PyqForm},
        },
        service::upload::UploadService,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Upload lecture notes
///
/// Multipart fields: `notespdf` (file), `notesname`, `subjectid`.
#[utoipa::path(
    post,
    path = "/api/upload/notes",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Note stored and created", body = UploadResultDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Storage or backend failure", body = ErrorDto)
    ),
)]
pub async fn upload_note(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let admin = SessionAdmin::get(&session).await?;
    let form = NoteForm::from(read_multipart(multipart).await?);

    let file = UploadService::new(&state.backend, &state.storage)
        .upload_note(admin.as_ref(), form)
        .await?;

    Ok((StatusCode::OK, Json(UploadResultDto { success: true, file })))
}

/// Upload a previous-year question paper
///
/// Multipart fields: `pyqpdf` (file), `pyqname`, `pyqyear`, `pyqtype` (`MID` or `END`),
/// `subjectid`.
#[utoipa::path(
    post,
    path = "/api/upload/pyq",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "PYQ stored and created", body = UploadResultDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Storage or backend failure", body = ErrorDto)
    ),
)]
pub async fn upload_pyq(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let admin = SessionAdmin::get(&session).await?;
    let form = PyqForm::from(read_multipart(multipart).await?);

    let file = UploadService::new(&state.backend, &state.storage)
        .upload_pyq(admin.as_ref(), form)
        .await?;

    Ok((StatusCode::OK, Json(UploadResultDto { success: true, file })))
}

/// Link a YouTube video to a subject
#[utoipa::path(
    post,
    path = "/api/upload/video",
    tag = UPLOAD_TAG,
    request_body = VideoLinkDto,
    responses(
        (status = 200, description = "Video created", body = UploadResultDto),
        (status = 400, description = "Missing fields or not a YouTube link", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Backend failure", body = ErrorDto)
    ),
)]
pub async fn upload_video(
    State(state): State<AppState>,
    session: Session,
    Json(video): Json<VideoLinkDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = SessionAdmin::get(&session).await?;

    let file = UploadService::new(&state.backend, &state.storage)
        .upload_video(admin.as_ref(), video)
        .await?;

    Ok((StatusCode::OK, Json(UploadResultDto { success: true, file })))
}

/// Create a branch with a display image
///
/// Multipart fields: `image` (file), `branchname`, `branchcode`.
#[utoipa::path(
    post,
    path = "/api/upload/branch",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Branch image stored and branch created", body = BranchResultDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Storage or backend failure", body = ErrorDto)
    ),
)]
pub async fn create_branch(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let admin = SessionAdmin::get(&session).await?;
    let form = BranchForm::from(read_multipart(multipart).await?);

    let data = UploadService::new(&state.backend, &state.storage)
        .create_branch(admin.as_ref(), form)
        .await?;

    Ok((StatusCode::OK, Json(BranchResultDto { success: true, data })))
}
