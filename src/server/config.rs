use std::net::SocketAddr;

use secrecy::Secret;

use crate::server::error::config::ConfigError;

pub static DEFAULT_API_URL: &str = "http://localhost:8000";
pub static DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Maximum accepted request body, uploads are forwarded to S3 in a single PUT
pub const UPLOAD_BODY_LIMIT: usize = 50 * 1024 * 1024;

pub struct Config {
    pub api_url: String,
    pub aws_region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: Secret<String>,
    pub aws_s3_bucket_name: String,
    /// Path-style endpoint for S3-compatible storage, AWS virtual-hosted URLs are used when unset
    pub aws_s3_endpoint: Option<String>,
    /// Redis-compatible session store, sessions are kept in memory when unset
    pub valkey_url: Option<String>,
    pub server_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source, `lookup` returns `None` for unset variables
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |var: &str| present(lookup(var));
        let required =
            |var: &str| optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        Ok(Self {
            api_url: optional("API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            aws_region: required("AWS_REGION")?,
            aws_access_key_id: required("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: Secret::new(required("AWS_SECRET_ACCESS_KEY")?),
            aws_s3_bucket_name: required("AWS_S3_BUCKET_NAME")?,
            aws_s3_endpoint: optional("AWS_S3_ENDPOINT")
                .map(|endpoint| endpoint.trim_end_matches('/').to_string()),
            valkey_url: optional("VALKEY_URL"),
            server_address: parse_address(
                optional("SERVER_ADDRESS").as_deref().unwrap_or(DEFAULT_SERVER_ADDRESS),
            )?,
        })
    }
}

/// Unset and blank variables are both treated as absent
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
        var: "SERVER_ADDRESS".to_string(),
        reason: e.to_string(),
    })
}
