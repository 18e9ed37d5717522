//! Request and response bodies of the backend API.
//!
//! Field names follow the backend's wire format, which mixes snake, camel and flat case.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateNoteRequest {
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
    pub link: String,
    pub notesname: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePyqRequest {
    pub pyqname: String,
    pub pyqyear: String,
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
    pub links: String,
    pub pyqtype: String,
}

#[derive(Debug, Serialize)]
pub struct CreateVideoRequest {
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
    pub link: String,
    pub videoname: String,
}

#[derive(Debug, Serialize)]
pub struct CreateBranchRequest {
    pub branchname: String,
    pub branchcode: String,
    pub displayimage: String,
}

/// Error body returned by the backend on non-success statuses
#[derive(Debug, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
