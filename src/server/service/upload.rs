//! Authorized upload dispatchers.
//!
//! Every dispatch follows the same order: validate the form, take the bearer token from the
//! caller's session, upload the payload to object storage (when there is one), then make a
//! single metadata-creation call to the backend. A failed step ends the dispatch. An object
//! that was uploaded before the backend call failed stays in the bucket.

use serde_json::Value;

use crate::{
    model::resource::VideoLinkDto,
    server::{
        client::{
            backend::BackendClient,
            storage::{
                key::{StorageCategory, StorageKey},
                StorageClient,
            },
        },
        error::{auth::AuthError, Error},
        model::{
            backend::{CreateBranchRequest, CreateNoteRequest, CreatePyqRequest, CreateVideoRequest},
            session::admin::AdminSession,
            upload::{BranchForm, NoteForm, PyqForm, UploadFile, VideoUpload},
        },
    },
};

pub struct UploadService<'a> {
    backend: &'a BackendClient,
    storage: &'a StorageClient,
}

impl<'a> UploadService<'a> {
    pub fn new(backend: &'a BackendClient, storage: &'a StorageClient) -> Self {
        Self { backend, storage }
    }

    /// Uploads a lecture note PDF and registers it with the backend.
    ///
    /// # Arguments
    /// - `admin` - Signed-in admin from the request's session, if any
    /// - `form` - Submitted note form
    ///
    /// # Returns
    /// - `Ok(Value)` - Backend response body for the created note
    /// - `Err(Error::ValidationError)` - Missing or malformed field, nothing was sent
    /// - `Err(Error::UpstreamError)` - Storage or backend call failed
    /// - `Err(Error::AuthError(AuthError::MissingAccessToken))` - No one is signed in, nothing was sent
    pub async fn upload_note(
        &self,
        admin: Option<&AdminSession>,
        form: NoteForm,
    ) -> Result<Value, Error> {
        let upload = form.validate()?;
        let token = bearer_token(admin)?;

        // Notes are always served as PDFs regardless of what the browser reported
        let link = self
            .store(StorageCategory::Notes, &upload.name, &upload.file, "application/pdf")
            .await?;

        let body = CreateNoteRequest {
            subject_id: upload.subject_id,
            link,
            notesname: upload.name,
        };
        let created = self.backend.create_note(token, &body).await?;

        tracing::info!(
            subject_id = body.subject_id,
            name = %body.notesname,
            "Created note"
        );

        Ok(created)
    }

    /// Uploads a previous-year question paper and registers it with the backend.
    ///
    /// Same contract as [`UploadService::upload_note`], additionally requiring exam year and
    /// exam type (`MID` or `END`).
    pub async fn upload_pyq(
        &self,
        admin: Option<&AdminSession>,
        form: PyqForm,
    ) -> Result<Value, Error> {
        let upload = form.validate()?;
        let token = bearer_token(admin)?;

        let link = self
            .store(
                StorageCategory::Pyqs,
                &upload.name,
                &upload.file,
                upload.file.content_type_or_default(),
            )
            .await?;

        let body = CreatePyqRequest {
            pyqname: upload.name,
            pyqyear: upload.year,
            subject_id: upload.subject_id,
            links: link,
            pyqtype: upload.exam_type.as_str().to_string(),
        };
        let created = self.backend.create_pyq(token, &body).await?;

        tracing::info!(
            subject_id = body.subject_id,
            name = %body.pyqname,
            year = %body.pyqyear,
            exam_type = %body.pyqtype,
            "Created PYQ"
        );

        Ok(created)
    }

    /// Registers a YouTube video link with the backend, nothing is uploaded to storage.
    pub async fn upload_video(
        &self,
        admin: Option<&AdminSession>,
        dto: VideoLinkDto,
    ) -> Result<Value, Error> {
        let upload = VideoUpload::try_from(dto)?;
        let token = bearer_token(admin)?;

        let body = CreateVideoRequest {
            subject_id: upload.subject_id,
            link: upload.link,
            videoname: upload.name,
        };
        let created = self.backend.create_video(token, &body).await?;

        tracing::info!(
            subject_id = body.subject_id,
            name = %body.videoname,
            "Created video"
        );

        Ok(created)
    }

    /// Uploads a branch display image and creates the branch in the backend.
    pub async fn create_branch(
        &self,
        admin: Option<&AdminSession>,
        form: BranchForm,
    ) -> Result<Value, Error> {
        let upload = form.validate()?;
        let token = bearer_token(admin)?;

        let displayimage = self
            .store(
                StorageCategory::Branches,
                &upload.name,
                &upload.image,
                upload.image.content_type_or_default(),
            )
            .await?;

        let body = CreateBranchRequest {
            branchname: upload.name,
            branchcode: upload.code,
            displayimage,
        };
        let created = self.backend.create_branch(token, &body).await?;

        tracing::info!(
            name = %body.branchname,
            code = %body.branchcode,
            "Created branch"
        );

        Ok(created)
    }

    /// Writes the file under a fresh key and returns its public URL
    async fn store(
        &self,
        category: StorageCategory,
        name: &str,
        file: &UploadFile,
        content_type: &str,
    ) -> Result<String, Error> {
        let key = StorageKey::new(category, name, &file.extension());
        let url = self
            .storage
            .put_object(&key, file.bytes.clone(), content_type)
            .await?;

        tracing::info!(key = %key, bytes = file.bytes.len(), "Stored upload");

        Ok(url)
    }
}

fn bearer_token(admin: Option<&AdminSession>) -> Result<&str, Error> {
    match admin {
        Some(admin) if !admin.token.is_empty() => Ok(&admin.token),
        _ => {
            tracing::warn!("Rejected upload without an access token in session");

            Err(AuthError::MissingAccessToken.into())
        }
    }
}
