//! Shared test scaffolding for the admin service.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the mock backend and storage
//! endpoints a test needs, then `build()` returns a [`TestContext`] holding the running mock
//! server and an in-memory session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::*, fixtures, TestBuilder, TestContext, TestError};
}
