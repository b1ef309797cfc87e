//! Configuration schema for the demo service.
//!
//! Mirrors a typical deployment document: application identity, listener
//! settings, and storage credentials. Secrets and per-environment values are
//! written as `${VAR}` placeholders in `config/config.toml` and filled from the
//! environment at startup.

use confique::Config;
use serde::{Deserialize, Serialize};

#[derive(Config, Serialize, Deserialize, Debug)]
pub struct ServiceConfig {
    /// Application identity and build metadata.
    #[config(nested)]
    pub app: AppConfig,

    /// HTTP listener settings.
    #[config(nested)]
    pub server: ServerConfig,

    /// Azure storage account and queues.
    #[config(nested)]
    pub azure: AzureConfig,
}

#[derive(Config, Serialize, Deserialize, Debug)]
pub struct AppConfig {
    /// Application name.
    pub name: String,

    /// Application version.
    #[config(default = "0.0.0")]
    pub version: String,

    /// Commit the binary was built from.
    pub commit_sha: Option<String>,

    /// CI build identifier.
    pub build_id: Option<String>,

    /// Build timestamp.
    pub build_date: Option<String>,

    /// Deployment environment (local, dev, prod).
    #[config(default = "local")]
    pub env: String,

    /// Enable debug output.
    #[config(default = false)]
    pub debug: bool,
}

#[derive(Config, Serialize, Deserialize, Debug)]
pub struct ServerConfig {
    /// Host to bind to.
    #[config(default = "0.0.0.0")]
    pub host: String,

    /// Port to bind to.
    #[config(default = "8080")]
    pub port: String,

    /// Liveness endpoint path.
    #[config(default = "/health")]
    pub health_endpoint: String,

    /// Build info endpoint path.
    #[config(default = "/info")]
    pub info_endpoint: String,
}

#[derive(Config, Serialize, Deserialize, Debug)]
pub struct AzureConfig {
    /// Storage account name.
    pub az_storage_account_name: String,

    /// Storage account key. Keep this in the environment.
    pub az_storage_account_key: String,

    /// Queues to consume from.
    #[config(default = ["jobs"])]
    pub queues: Vec<String>,
}
