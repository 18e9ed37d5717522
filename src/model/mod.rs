//! Data transfer objects shared by the HTTP API and its clients.

pub mod admin;
pub mod api;
pub mod resource;
