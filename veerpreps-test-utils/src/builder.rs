//! Declarative test builder.
//!
//! Endpoint methods only queue work. Mocks are created on the server during `build()`, in the
//! order: custom mocks first, then the endpoint shortcuts.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{
    constant::{TEST_BUCKET, TEST_TOKEN},
    error::TestError,
    TestContext,
};

pub static SIGN_IN_PATH: &str = "/api/user/auth/signin";

static S3_ACCESS_DENIED: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>";

/// Builder for declarative test initialization.
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,

    // (status, body, expected_requests)
    sign_in_endpoints: Vec<(usize, Value, usize)>,
    // (path, status, body, expected_requests)
    get_endpoints: Vec<(String, usize, Value, usize)>,
    create_endpoints: Vec<(String, usize, Value, usize)>,
    // (category, status, expected_requests)
    storage_put_endpoints: Vec<(String, usize, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            sign_in_endpoints: Vec::new(),
            get_endpoints: Vec::new(),
            create_endpoints: Vec::new(),
            storage_put_endpoints: Vec::new(),
        }
    }

    /// Add a custom mock endpoint.
    ///
    /// The closure receives the mock server and returns a configured `Mock`. Use this for
    /// endpoints not covered by the shortcuts below.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Add a backend sign-in endpoint at `POST /api/user/auth/signin` returning `body`.
    pub fn with_sign_in_endpoint(mut self, status: usize, body: Value, expected: usize) -> Self {
        self.sign_in_endpoints.push((status, body, expected));
        self
    }

    /// Add an unauthenticated backend `GET` endpoint returning `body`.
    pub fn with_backend_get_endpoint(
        mut self,
        path: &str,
        status: usize,
        body: Value,
        expected: usize,
    ) -> Self {
        self.get_endpoints
            .push((path.to_string(), status, body, expected));
        self
    }

    /// Add a backend `POST` endpoint that only matches requests bearing [`TEST_TOKEN`].
    pub fn with_create_endpoint(
        mut self,
        path: &str,
        status: usize,
        body: Value,
        expected: usize,
    ) -> Self {
        self.create_endpoints
            .push((path.to_string(), status, body, expected));
        self
    }

    /// Add a bucket `PUT` endpoint for any key under `uploads/<category>/`.
    ///
    /// Non-success statuses answer with an S3 `AccessDenied` error document.
    pub fn with_storage_put_endpoint(
        mut self,
        category: &str,
        status: usize,
        expected: usize,
    ) -> Self {
        self.storage_put_endpoints
            .push((category.to_string(), status, expected));
        self
    }

    /// Start the mock server and create every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError)` - Context setup failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (status, body, expected) in self.sign_in_endpoints {
            mocks.push(
                setup
                    .server
                    .mock("POST", SIGN_IN_PATH)
                    .with_status(status)
                    .with_header("content-type", "application/json")
                    .with_body(body.to_string())
                    .expect(expected)
                    .create(),
            );
        }

        for (path, status, body, expected) in self.get_endpoints {
            mocks.push(
                setup
                    .server
                    .mock("GET", path.as_str())
                    .with_status(status)
                    .with_header("content-type", "application/json")
                    .with_body(body.to_string())
                    .expect(expected)
                    .create(),
            );
        }

        for (path, status, body, expected) in self.create_endpoints {
            mocks.push(
                setup
                    .server
                    .mock("POST", path.as_str())
                    .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
                    .with_status(status)
                    .with_header("content-type", "application/json")
                    .with_body(body.to_string())
                    .expect(expected)
                    .create(),
            );
        }

        for (category, status, expected) in self.storage_put_endpoints {
            let path = Matcher::Regex(format!(r"^/{}/uploads/{}/.+$", TEST_BUCKET, category));
            let mock = setup.server.mock("PUT", path).with_status(status);
            let mock = if (200..300).contains(&status) {
                mock
            } else {
                mock.with_header("content-type", "application/xml")
                    .with_body(S3_ACCESS_DENIED)
            };

            mocks.push(mock.expect(expected).create());
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
