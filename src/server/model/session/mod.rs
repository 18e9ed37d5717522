//! Session data models.
//!
//! Type-safe wrappers for data kept in the tower-sessions store (Redis or in-memory). The
//! cookie only carries the session ID, the bearer token stays server-side.

pub mod admin;
