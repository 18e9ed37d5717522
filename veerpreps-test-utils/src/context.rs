//! Test context returned by `TestBuilder`.
//!
//! One mockito server plays both the content backend and the S3-compatible bucket, so the
//! clients under test are pointed at [`TestContext::server_url`] for both.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment for a single test.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_sign_in_endpoint(200, fixtures::backend::sign_in_body(TEST_TOKEN), 1)
///     .build()
///     .await?;
///
/// let backend = BackendClient::new(reqwest::Client::new(), &test.server_url());
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session backed by an in-memory store, never persisted
    pub session: Session,

    pub(crate) server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, without a trailing slash
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
