//! Placeholder values shared across tests. None of these are real credentials.

/// Access token returned by the mock sign-in endpoint and expected on authorized calls.
pub static TEST_TOKEN: &str = "tok123";

pub static TEST_EMAIL: &str = "admin@veerpreps.test";
pub static TEST_PASSWORD: &str = "correct-horse";
pub static TEST_ADMIN_NAME: &str = "Asha";
pub static TEST_ROLE: &str = "admin";

pub static TEST_BUCKET: &str = "test-bucket";
pub static TEST_REGION: &str = "ap-south-1";
/// Kept free of regex metacharacters so tests can embed it in header matchers.
pub static TEST_ACCESS_KEY_ID: &str = "AKIDTESTEXAMPLE";
pub static TEST_SECRET_ACCESS_KEY: &str = "test-secret-access-key";
