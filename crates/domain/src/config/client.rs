use serde::{Deserialize, Serialize};

/// Settings for outgoing DNS-over-HTTPS questions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// URL of the DNS-over-HTTPS JSON endpoint.
    #[serde(default = "default_server")]
    pub server: String,

    /// Whole-exchange timeout in seconds, enforced by the HTTP client.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Allow questions to be sent over plain HTTP.
    #[serde(default)]
    pub allow_http: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout: default_timeout(),
            allow_http: false,
        }
    }
}

fn default_server() -> String {
    "https://dns.google.com/resolve".to_string()
}

fn default_timeout() -> u64 {
    30
}
