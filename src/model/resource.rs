use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BranchDto {
    pub branch_id: i64,
    #[serde(default)]
    pub userid: String,
    pub displayimage: String,
    pub branchname: String,
    pub branchcode: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub subject_id: String,
    #[serde(rename = "yearId")]
    pub year_id: i64,
    pub subjectname: String,
    pub branchname: String,
    #[serde(default)]
    pub iscommon: bool,
    pub branchid: i64,
}

/// Branches and subjects used to populate the upload forms
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadDataDto {
    #[serde(default)]
    pub branches: Vec<BranchDto>,
    #[serde(default)]
    pub subjects: Vec<SubjectDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadDataResponseDto {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: UploadDataDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BranchListDto {
    #[serde(default)]
    pub branches: Vec<BranchDto>,
    #[serde(default)]
    pub message: String,
}

/// Platform-wide resource counts
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub users: i64,
    pub pyqs: i64,
    pub notes: i64,
    pub videos: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponseDto {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: StatsDto,
}

/// YouTube video link submitted for a subject
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct VideoLinkDto {
    #[serde(default)]
    pub videoname: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub subjectid: String,
}

/// Result of a note, PYQ or video upload, `file` is the backend's response body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResultDto {
    pub success: bool,
    #[schema(value_type = Object)]
    pub file: Value,
}

/// Result of a branch creation, `data` is the backend's response body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BranchResultDto {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: Value,
}
