//! Ferrous DoH Domain Layer
//!
//! The DNS-over-HTTPS JSON data model: record type and return code symbol
//! tables, the question/answer types with their JSON and URL-query mappings,
//! client errors and configuration.
pub mod answer;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod exchange;
pub mod fqdn;
pub mod question;

pub use answer::Answer;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{Record, RecordType, ReturnCode};
pub use errors::{BoxError, ClientError};
pub use exchange::Exchange;
pub use fqdn::{fqdn, is_fqdn};
pub use question::Question;
