pub mod client;
pub mod errors;
pub mod local_records;
pub mod logging;
pub mod root;
pub mod server;

pub use client::ClientConfig;
pub use errors::ConfigError;
pub use local_records::LocalRecordConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
