mod doh_client;
mod question_handler;

pub use doh_client::DohClientPort;
pub use question_handler::QuestionHandler;
