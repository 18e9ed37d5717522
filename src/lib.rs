//! VeerPreps admin service.
//!
//! HTTP service used by platform staff to sign in against the VeerPreps backend and upload
//! notes, previous-year question papers, YouTube videos and branches. Uploaded files are
//! written to S3 and their metadata is registered with the backend API.

pub mod model;
pub mod server;
