use crate::server::{
    client::{backend::BackendClient, storage::StorageClient},
    config::Config,
};

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub storage: StorageClient,
}

impl AppState {
    pub fn new(backend: BackendClient, storage: StorageClient) -> Self {
        Self { backend, storage }
    }
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        let http = reqwest::Client::new();

        Self {
            backend: BackendClient::new(http.clone(), &config.api_url),
            storage: StorageClient::new(http, config.into()),
        }
    }
}
