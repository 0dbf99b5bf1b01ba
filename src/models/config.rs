//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// Connection settings for the remote data platform.
///
/// The URL is optional on purpose: a missing value is a runtime
/// `ConfigurationError` raised on first use of the client, not a startup
/// parse failure.
pub struct BackendConfig {
    /// Base URL of the data platform deployment.
    pub url: Option<String>,
    /// Deploy key sent as a bearer token, if the deployment requires one.
    pub deploy_key: Option<String>,
}
