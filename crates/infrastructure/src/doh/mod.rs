//! DNS-over-HTTPS using the JSON response format.
//!
//! Questions travel as URL query parameters on a GET request and answers come
//! back as an `application/dns-json` body:
//!
//! ```text
//! GET /resolve?name=example.org.&type=1 HTTP/1.1
//! Accept: application/dns-json
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/dns-json; charset=utf-8
//!
//! {"Status":0,"TC":false,...,"Answer":[{"name":"example.org.","type":1,"TTL":300,"data":"127.0.0.1"}]}
//! ```
pub mod client;
pub mod server;

pub use client::{execute, DohClient};
pub use server::DohServer;

/// Media type of DoH JSON requests and responses.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// User-Agent sent with every client request.
pub const USER_AGENT: &str = "doh/1.0.0 (+https://github.com/jamescun/doh)";
