//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "users-api".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8888,
            log_level: "info,tower_http=debug".to_string(),
        }
    }
}

/// Administrator account inserted into the empty store at startup.
#[derive(Clone, Deserialize, Serialize)]
pub struct BaseAdminConfig {
    pub email: String,
    pub username: String,
    /// Plain-text password, hashed before it reaches the store
    #[serde(skip_serializing)]
    pub password: String,
}

impl std::fmt::Debug for BaseAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseAdminConfig")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for BaseAdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}
