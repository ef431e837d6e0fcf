pub mod chain;
pub mod fn_handler;
pub mod forward;
pub mod local_records;

pub use chain::ChainHandler;
pub use fn_handler::FnHandler;
pub use forward::ForwardingHandler;
pub use local_records::LocalRecordsHandler;
