pub mod doh;

pub use doh::start_doh_server;
