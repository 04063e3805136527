use serde::{Deserialize, Serialize};

/// Connection settings for the retrieval-augmented completion backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub api_key: String,
    pub endpoint: String,
    pub deployment_name: String,
    pub api_version: String,
    pub search_endpoint: String,
    pub search_key: String,
    pub index_name: String,
    pub embedding_deployment: String,
    pub connect_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
}

impl BackendConfig {
    #[must_use]
    pub fn new(
        api_key: String,
        endpoint: String,
        deployment_name: String,
        search_endpoint: String,
        search_key: String,
        index_name: String,
    ) -> Self {
        Self {
            api_key,
            endpoint,
            deployment_name,
            api_version: "2024-03-01-preview".to_string(),
            search_endpoint,
            search_key,
            index_name,
            embedding_deployment: "text-embedding-3-large".to_string(),
            connect_timeout_seconds: 10,
            request_timeout_seconds: 60,
        }
    }

    #[must_use]
    pub fn with_api_version(mut self, version: String) -> Self {
        self.api_version = version;
        self
    }

    #[must_use]
    pub fn with_embedding_deployment(mut self, deployment: String) -> Self {
        self.embedding_deployment = deployment;
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, connect_seconds: u64, request_seconds: u64) -> Self {
        self.connect_timeout_seconds = connect_seconds;
        self.request_timeout_seconds = request_seconds;
        self
    }

    /// Semantic configuration derives from the index name by convention.
    #[must_use]
    pub fn semantic_configuration(&self) -> String {
        format!("{}-semantic-configuration", self.index_name)
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment_name,
            self.api_version
        )
    }
}
