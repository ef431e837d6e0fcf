use super::{DNS_JSON_CONTENT_TYPE, USER_AGENT};
use async_trait::async_trait;
use ferrous_doh_application::ports::DohClientPort;
use ferrous_doh_domain::{Answer, ClientError, Exchange, Question};
use reqwest::header;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Google's public DoH JSON endpoint.
pub const DEFAULT_SERVER: &str = "https://dns.google.com/resolve";

/// DNS-over-HTTPS JSON client.
///
/// Timeouts are whatever the supplied `reqwest::Client` enforces; this layer
/// only classifies them.
#[derive(Clone)]
pub struct DohClient {
    addr: Option<Url>,
    http: reqwest::Client,
    allow_http: bool,
}

impl DohClient {
    pub fn new(addr: Option<Url>, http: reqwest::Client) -> Self {
        Self {
            addr,
            http,
            allow_http: false,
        }
    }

    /// Client for [`DEFAULT_SERVER`] using a default `reqwest::Client`.
    pub fn default_client() -> Self {
        Self::new(Url::parse(DEFAULT_SERVER).ok(), reqwest::Client::new())
    }

    /// Allow questions to be sent without HTTPS.
    pub fn with_allow_http(mut self, allow: bool) -> Self {
        self.allow_http = allow;
        self
    }

    pub fn addr(&self) -> Option<&Url> {
        self.addr.as_ref()
    }

    /// Builds the HTTP client used for DoH exchanges.
    pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
    }

    pub async fn query(&self, question: &Question) -> Exchange {
        execute(question, self.addr.as_ref(), &self.http, self.allow_http).await
    }
}

#[async_trait]
impl DohClientPort for DohClient {
    async fn query(&self, question: &Question) -> Exchange {
        DohClient::query(self, question).await
    }
}

/// Sends one question to `server` and decodes the answer.
///
/// Exactly one attempt is made. The round-trip time covers the whole call,
/// including calls that fail before anything is sent.
pub async fn execute(
    question: &Question,
    server: Option<&Url>,
    http: &reqwest::Client,
    allow_http: bool,
) -> Exchange {
    let start = Instant::now();
    let result = send(question, server, http, allow_http).await;

    Exchange {
        result,
        rtt: start.elapsed(),
    }
}

async fn send(
    question: &Question,
    server: Option<&Url>,
    http: &reqwest::Client,
    allow_http: bool,
) -> Result<Answer, ClientError> {
    let server = server.ok_or(ClientError::NoServer)?;
    if server.scheme() != "https" && !allow_http {
        return Err(ClientError::HttpsRequired);
    }

    let mut url = server.clone();
    url.set_query(Some(&question.to_query()));
    url.set_fragment(None);

    debug!(
        url = %url,
        name = %question.name,
        record_type = %question.record_type,
        "Sending DoH JSON query"
    );

    let response = http
        .get(url)
        .header(header::ACCEPT, DNS_JSON_CONTENT_TYPE)
        .header(header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(classify)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ClientError::Http(status.as_u16()));
    }

    let body = response.bytes().await.map_err(classify)?;

    debug!(
        name = %question.name,
        response_len = body.len(),
        "DoH JSON response received"
    );

    Ok(serde_json::from_slice(&body)?)
}

fn classify(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::timeout(e)
    } else {
        ClientError::transport(e)
    }
}
