//! Server application core modules.
//!
//! HTTP routing, staff sign-in, upload dispatch and the clients for the content backend and
//! object storage.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
