//! API client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the API client.
///
/// Credentials are always supplied externally (flags, environment, secret
/// store) and never embedded in source or configuration defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full endpoint URL, e.g. `https://zabbix.example.com/api_jsonrpc.php`.
    pub url: String,
    /// API user name.
    pub username: String,
    /// API password.
    pub password: String,
    /// Whether to verify the endpoint's TLS certificate.
    pub verify_tls: bool,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "https://zabbix.example.com/api_jsonrpc.php".to_string(),
            username: String::new(),
            password: String::new(),
            verify_tls: true,
            timeout_secs: 30,
        }
    }
}
