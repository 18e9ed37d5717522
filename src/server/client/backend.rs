use reqwest::Response;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    model::resource::{BranchListDto, StatsResponseDto, UploadDataResponseDto},
    server::{
        error::upstream::UpstreamError,
        model::backend::{
            BackendErrorBody, CreateBranchRequest, CreateNoteRequest, CreatePyqRequest,
            CreateVideoRequest, SignInRequest, SignInResponse,
        },
    },
};

pub static SIGN_IN_PATH: &str = "/api/user/auth/signin";
pub static CREATE_NOTE_PATH: &str = "/api/notes/create";
pub static CREATE_PYQ_PATH: &str = "/api/pyq/create";
pub static CREATE_VIDEO_PATH: &str = "/api/videos/create";
pub static CREATE_BRANCH_PATH: &str = "/api/branch/create";
pub static UPLOAD_DATA_PATH: &str = "/api/admin/upload-data";
pub static BRANCHES_PATH: &str = "/api/branch";
pub static STATS_PATH: &str = "/api/admin/stats";

/// Client for the VeerPreps backend API.
///
/// Every method makes exactly one request, nothing is retried. Failures carry the backend's
/// `message` when it sent one so callers can surface it.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchanges staff credentials for a bearer token
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, UpstreamError> {
        let response = self
            .http
            .post(self.url(SIGN_IN_PATH))
            .json(&SignInRequest { email, password })
            .send()
            .await
            .map_err(|e| UpstreamError::Backend(e.to_string()))?;

        read_json(response).await
    }

    pub async fn create_note(
        &self,
        token: &str,
        body: &CreateNoteRequest,
    ) -> Result<Value, UpstreamError> {
        self.post_authorized(token, CREATE_NOTE_PATH, body).await
    }

    pub async fn create_pyq(
        &self,
        token: &str,
        body: &CreatePyqRequest,
    ) -> Result<Value, UpstreamError> {
        self.post_authorized(token, CREATE_PYQ_PATH, body).await
    }

    pub async fn create_video(
        &self,
        token: &str,
        body: &CreateVideoRequest,
    ) -> Result<Value, UpstreamError> {
        self.post_authorized(token, CREATE_VIDEO_PATH, body).await
    }

    pub async fn create_branch(
        &self,
        token: &str,
        body: &CreateBranchRequest,
    ) -> Result<Value, UpstreamError> {
        self.post_authorized(token, CREATE_BRANCH_PATH, body).await
    }

    pub async fn get_upload_data(&self) -> Result<UploadDataResponseDto, UpstreamError> {
        self.get_json(UPLOAD_DATA_PATH).await
    }

    pub async fn get_branches(&self) -> Result<BranchListDto, UpstreamError> {
        self.get_json(BRANCHES_PATH).await
    }

    pub async fn get_stats(&self) -> Result<StatsResponseDto, UpstreamError> {
        self.get_json(STATS_PATH).await
    }

    /// POSTs a metadata body with the bearer token and returns the response body as-is
    async fn post_authorized<B: Serialize>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| UpstreamError::Backend(e.to_string()))?;

        let response = check_status(response).await?;
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Backend(e.to_string()))?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| UpstreamError::Backend(e.to_string()))?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| UpstreamError::Backend(e.to_string()))
}

/// Turns a non-success response into an error carrying the backend's message
async fn check_status(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<BackendErrorBody>(&body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

    Err(UpstreamError::Backend(message))
}
