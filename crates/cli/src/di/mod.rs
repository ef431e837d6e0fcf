mod handlers;

pub use handlers::build_question_handler;
