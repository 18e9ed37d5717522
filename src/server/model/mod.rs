//! Server application models and type definitions.
//!
//! Application state, session data stored through tower-sessions, validated upload forms and
//! the request/response bodies exchanged with the backend API.

pub mod app;
pub mod backend;
pub mod session;
pub mod upload;
