use super::DNS_JSON_CONTENT_TYPE;
use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use ferrous_doh_application::ports::QuestionHandler;
use ferrous_doh_domain::{Answer, Question};
use std::sync::Arc;
use tracing::{debug, error};

/// Content-Type of every successful response.
pub const RESPONSE_CONTENT_TYPE: &str = "application/dns-json; charset=utf-8";

/// DNS-over-HTTPS JSON endpoint.
///
/// Validates the request, turns its query parameters into a [`Question`] and
/// hands it to the configured [`QuestionHandler`]. Validation failures are
/// bare status codes with an empty body.
#[derive(Clone, Default)]
pub struct DohServer {
    handler: Option<Arc<dyn QuestionHandler>>,
    allow_http: bool,
    trust_forwarded_proto: bool,
}

impl DohServer {
    pub fn new(handler: Arc<dyn QuestionHandler>) -> Self {
        Self {
            handler: Some(handler),
            allow_http: false,
            trust_forwarded_proto: false,
        }
    }

    /// Answer requests that did not come over HTTPS.
    pub fn with_allow_http(mut self, allow: bool) -> Self {
        self.allow_http = allow;
        self
    }

    /// Take the scheme from `X-Forwarded-Proto` when the request target has
    /// none. Only enable behind a proxy that overwrites the header.
    pub fn with_trusted_forwarded_proto(mut self, trust: bool) -> Self {
        self.trust_forwarded_proto = trust;
        self
    }

    /// Mounts the endpoint on `path`. Every method is routed here so that
    /// non-GET requests get 400 rather than 405.
    pub fn router(self, path: &str) -> Router {
        Router::new()
            .route(path, any(handle_request))
            .with_state(self)
    }

    /// Checks run in a fixed order and the first failure decides the status.
    pub async fn serve(&self, method: &Method, uri: &Uri, headers: &HeaderMap) -> Response {
        if *method != Method::GET {
            return reject(StatusCode::BAD_REQUEST, "method must be GET");
        }

        let accept = headers
            .get(header::ACCEPT)
            .map(|v| v.as_bytes())
            .unwrap_or_default();
        if accept.is_empty() {
            return reject(StatusCode::BAD_REQUEST, "missing Accept header");
        }

        // Inverted compared to usual DoH practice: an explicit dns-json
        // Accept is refused. Deployed clients rely on this.
        if accept.starts_with(DNS_JSON_CONTENT_TYPE.as_bytes()) {
            return reject(StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported Accept");
        }

        let Some(handler) = &self.handler else {
            return reject(StatusCode::INTERNAL_SERVER_ERROR, "no handler configured");
        };

        if !is_https(uri, headers, self.trust_forwarded_proto) && !self.allow_http {
            return reject(StatusCode::FORBIDDEN, "https required");
        }

        let question = Question::from_query(uri.query().unwrap_or_default());
        if question.name.is_empty() {
            return reject(StatusCode::BAD_REQUEST, "missing name");
        }

        debug!(
            name = %question.name,
            record_type = %question.record_type,
            cd = question.disable_dnssec,
            "Resolving DoH question"
        );

        let answer = handler
            .resolve(&question)
            .await
            .unwrap_or_else(Answer::server_failure);

        encode(&answer)
    }
}

async fn handle_request(
    State(server): State<DohServer>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    server.serve(&method, &uri, &headers).await
}

/// Scheme from the request target. With `trust_forwarded_proto`, an
/// origin-form target falls back to `X-Forwarded-Proto` (TLS terminated in
/// front of us).
fn is_https(uri: &Uri, headers: &HeaderMap, trust_forwarded_proto: bool) -> bool {
    let scheme = uri.scheme_str().or_else(|| {
        if !trust_forwarded_proto {
            return None;
        }
        headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
    });

    scheme.is_some_and(|s| s.eq_ignore_ascii_case("https"))
}

fn reject(status: StatusCode, reason: &'static str) -> Response {
    debug!(status = status.as_u16(), reason, "Rejected DoH request");
    status.into_response()
}

/// The status is 200 once a question reached the handler.
fn encode(answer: &Answer) -> Response {
    let body = match serde_json::to_vec(answer) {
        Ok(mut body) => {
            body.push(b'\n');
            body
        }
        // Unreachable for `Answer`: string keys and plain values only.
        Err(e) => {
            error!(error = %e, "Failed to encode DoH answer");
            Vec::new()
        }
    };

    ([(header::CONTENT_TYPE, RESPONSE_CONTENT_TYPE)], body).into_response()
}
