//! AppState wiring for integration tests.

use secrecy::Secret;
use tower_sessions::Session;
use veerpreps_admin::server::{
    client::{
        backend::BackendClient,
        storage::{StorageClient, StorageConfig},
    },
    model::{
        app::AppState,
        session::admin::{AdminSession, SessionAdmin},
    },
};
use veerpreps_test_utils::prelude::*;

/// Extension trait pointing both upstream clients at the test's mock server
pub trait TestContextExt {
    fn to_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn to_app_state(&self) -> AppState {
        let http = reqwest::Client::new();

        let storage = StorageConfig {
            bucket: TEST_BUCKET.to_string(),
            region: TEST_REGION.to_string(),
            access_key_id: TEST_ACCESS_KEY_ID.to_string(),
            secret_access_key: Secret::new(TEST_SECRET_ACCESS_KEY.to_string()),
            endpoint: Some(self.server_url()),
        };

        AppState::new(
            BackendClient::new(http.clone(), &self.server_url()),
            StorageClient::new(http, storage),
        )
    }
}

pub fn test_admin() -> AdminSession {
    AdminSession {
        token: TEST_TOKEN.to_string(),
        role: TEST_ROLE.to_string(),
        name: TEST_ADMIN_NAME.to_string(),
    }
}

/// Put the test admin into `session` as if they had signed in
pub async fn sign_in(session: &Session) -> AdminSession {
    let admin = test_admin();
    SessionAdmin::insert(session, &admin)
        .await
        .expect("Failed to insert admin into session");

    admin
}
