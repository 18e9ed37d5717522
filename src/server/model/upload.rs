//! Upload forms and their validated counterparts.
//!
//! Forms hold whatever the client submitted. `validate` turns a form into an upload that has
//! every required field, and is always called before any storage or backend request is made.

use std::{collections::HashMap, path::Path, str::FromStr};

use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{model::resource::VideoLinkDto, server::error::validation::ValidationError};

pub static MISSING_FILE_OR_FIELDS: &str = "Missing file or required fields";
pub static MISSING_VIDEO_FIELDS: &str = "Missing required fields";
pub static MISSING_BRANCH_FIELDS: &str = "Missing fields";

static YOUTUBE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?:youtube\.com|youtu\.be)/(?:watch\?v=)?(.+)$")
        .expect("YouTube link pattern is valid")
});

/// A file part of a multipart submission
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadFile {
    /// Extension of the original file name including the leading dot, empty when there is none
    pub fn extension(&self) -> String {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }

    pub fn content_type_or_default(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|content_type| !content_type.is_empty())
            .unwrap_or("application/octet-stream")
    }
}

/// Text fields and files collected from a multipart body, keyed by field name
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadFile>,
}

impl MultipartForm {
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadFile> {
        self.files.remove(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamType {
    Mid,
    End,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mid => "MID",
            Self::End => "END",
        }
    }
}

impl FromStr for ExamType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MID" => Ok(Self::Mid),
            "END" => Ok(Self::End),
            _ => Err(ValidationError::InvalidExamType(value.to_string())),
        }
    }
}

#[derive(Debug, Default)]
pub struct NoteForm {
    pub file: Option<UploadFile>,
    pub notesname: Option<String>,
    pub subjectid: Option<String>,
}

#[derive(Debug)]
pub struct NoteUpload {
    pub file: UploadFile,
    pub name: String,
    pub subject_id: i64,
}

impl From<MultipartForm> for NoteForm {
    fn from(mut form: MultipartForm) -> Self {
        Self {
            file: form.take_file("notespdf"),
            notesname: form.take_text("notesname"),
            subjectid: form.take_text("subjectid"),
        }
    }
}

impl NoteForm {
    pub fn validate(self) -> Result<NoteUpload, ValidationError> {
        let missing = || ValidationError::MissingFields(MISSING_FILE_OR_FIELDS);

        let file = present_file(self.file).ok_or_else(missing)?;
        let name = present(self.notesname).ok_or_else(missing)?;
        let subject_id = present(self.subjectid).ok_or_else(missing)?;

        Ok(NoteUpload {
            file,
            name,
            subject_id: parse_subject_id(&subject_id)?,
        })
    }
}

#[derive(Debug, Default)]
pub struct PyqForm {
    pub file: Option<UploadFile>,
    pub pyqname: Option<String>,
    pub pyqyear: Option<String>,
    pub pyqtype: Option<String>,
    pub subjectid: Option<String>,
}

#[derive(Debug)]
pub struct PyqUpload {
    pub file: UploadFile,
    pub name: String,
    pub year: String,
    pub exam_type: ExamType,
    pub subject_id: i64,
}

impl From<MultipartForm> for PyqForm {
    fn from(mut form: MultipartForm) -> Self {
        Self {
            file: form.take_file("pyqpdf"),
            pyqname: form.take_text("pyqname"),
            pyqyear: form.take_text("pyqyear"),
            pyqtype: form.take_text("pyqtype"),
            subjectid: form.take_text("subjectid"),
        }
    }
}

impl PyqForm {
    pub fn validate(self) -> Result<PyqUpload, ValidationError> {
        let missing = || ValidationError::MissingFields(MISSING_FILE_OR_FIELDS);

        let file = present_file(self.file).ok_or_else(missing)?;
        let name = present(self.pyqname).ok_or_else(missing)?;
        let year = present(self.pyqyear).ok_or_else(missing)?;
        let exam_type = present(self.pyqtype).ok_or_else(missing)?;
        let subject_id = present(self.subjectid).ok_or_else(missing)?;

        Ok(PyqUpload {
            file,
            name,
            year,
            exam_type: exam_type.parse()?,
            subject_id: parse_subject_id(&subject_id)?,
        })
    }
}

#[derive(Debug)]
pub struct VideoUpload {
    pub name: String,
    pub link: String,
    pub subject_id: i64,
}

impl TryFrom<VideoLinkDto> for VideoUpload {
    type Error = ValidationError;

    fn try_from(dto: VideoLinkDto) -> Result<Self, Self::Error> {
        let missing = || ValidationError::MissingFields(MISSING_VIDEO_FIELDS);

        let name = present(Some(dto.videoname)).ok_or_else(missing)?;
        let link = present(Some(dto.link)).ok_or_else(missing)?;
        let subject_id = present(Some(dto.subjectid)).ok_or_else(missing)?;

        if !YOUTUBE_LINK.is_match(&link) {
            return Err(ValidationError::InvalidVideoLink);
        }

        Ok(VideoUpload {
            name,
            link,
            subject_id: parse_subject_id(&subject_id)?,
        })
    }
}

#[derive(Debug, Default)]
pub struct BranchForm {
    pub image: Option<UploadFile>,
    pub branchname: Option<String>,
    pub branchcode: Option<String>,
}

#[derive(Debug)]
pub struct BranchUpload {
    pub image: UploadFile,
    pub name: String,
    pub code: String,
}

impl From<MultipartForm> for BranchForm {
    fn from(mut form: MultipartForm) -> Self {
        Self {
            image: form.take_file("image"),
            branchname: form.take_text("branchname"),
            branchcode: form.take_text("branchcode"),
        }
    }
}

impl BranchForm {
    pub fn validate(self) -> Result<BranchUpload, ValidationError> {
        let missing = || ValidationError::MissingFields(MISSING_BRANCH_FIELDS);

        Ok(BranchUpload {
            name: present(self.branchname).ok_or_else(missing)?,
            code: present(self.branchcode).ok_or_else(missing)?,
            image: present_file(self.image).ok_or_else(missing)?,
        })
    }
}

/// Trimmed value, blank strings count as missing
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Browsers submit an empty part when no file was picked
fn present_file(file: Option<UploadFile>) -> Option<UploadFile> {
    file.filter(|file| !file.bytes.is_empty())
}

fn parse_subject_id(value: &str) -> Result<i64, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::InvalidSubjectId(value.to_string()))
}
