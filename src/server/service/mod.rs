//! Service layer.
//!
//! Services hold the request logic between controllers and the outbound clients: the
//! credential exchange, the upload dispatchers and the dashboard reads. Session data is
//! passed in explicitly by the controller, services never touch the session store.

pub mod auth;
pub mod dashboard;
pub mod upload;
