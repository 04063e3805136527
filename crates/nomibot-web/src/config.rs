use nomibot_core::BackendConfig;

/// Server configuration, read from `NOMIBOT_*` environment variables.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub backend: BackendConfig,
    pub port: u16,
}

impl BotConfig {
    pub fn from_env() -> Self {
        let backend = BackendConfig::new(
            env_or("NOMIBOT_API_KEY", ""),
            env_or("NOMIBOT_ENDPOINT", ""),
            env_or("NOMIBOT_DEPLOYMENT_NAME", ""),
            env_or("NOMIBOT_SEARCH_ENDPOINT", ""),
            env_or("NOMIBOT_SEARCH_KEY", ""),
            env_or("NOMIBOT_INDEX_NAME", ""),
        );

        let backend = match std::env::var("NOMIBOT_API_VERSION") {
            Ok(version) => backend.with_api_version(version),
            Err(_) => backend,
        };

        let port = std::env::var("NOMIBOT_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self { backend, port }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
