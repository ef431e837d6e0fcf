use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP path the DoH endpoint is mounted on.
    #[serde(default = "default_path")]
    pub path: String,

    /// Answer questions that did not arrive over HTTPS.
    #[serde(default)]
    pub allow_http: bool,

    /// Believe `X-Forwarded-Proto` for requests without a scheme. Only for
    /// deployments behind a TLS-terminating proxy that sets the header.
    #[serde(default)]
    pub trust_forwarded_proto: bool,

    /// Upstream DoH JSON server that questions are forwarded to when no
    /// local record matches.
    #[serde(default)]
    pub upstream: Option<String>,

    /// Allow the upstream to be reached over plain HTTP.
    #[serde(default)]
    pub upstream_allow_http: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            path: default_path(),
            allow_http: false,
            trust_forwarded_proto: false,
            upstream: None,
            upstream_allow_http: false,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8053
}

fn default_path() -> String {
    "/resolve".to_string()
}
