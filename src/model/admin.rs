use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials submitted to the sign-in endpoint
///
/// Absent fields deserialize as empty strings and are rejected as invalid credentials.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// The signed-in staff member
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminDto {
    pub name: String,
    pub role: String,
}
