//! Process configuration assembled from the CLI and the environment.

use std::env;

use common::{BaseAdminConfig, ServiceConfig};

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub base_admin: BaseAdminConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `host` and `port` come from the command line, which already folds in
    /// `HOST` / `PORT`.
    pub fn from_env(host: String, port: u16) -> Self {
        Self::from_lookup(host, port, |key| env::var(key).ok())
    }

    fn from_lookup(host: String, port: u16, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_defaults = ServiceConfig::default();
        let admin_defaults = BaseAdminConfig::default();

        Self {
            service: ServiceConfig {
                service_name: lookup("SERVICE_NAME").unwrap_or(service_defaults.service_name),
                host,
                port,
                log_level: lookup("LOG_LEVEL").unwrap_or(service_defaults.log_level),
            },
            base_admin: BaseAdminConfig {
                email: lookup("ADMIN_EMAIL").unwrap_or(admin_defaults.email),
                username: lookup("ADMIN_USERNAME").unwrap_or(admin_defaults.username),
                password: lookup("ADMIN_PASSWORD").unwrap_or(admin_defaults.password),
            },
        }
    }
}
