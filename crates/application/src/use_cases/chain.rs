use crate::ports::QuestionHandler;
use async_trait::async_trait;
use ferrous_doh_domain::{Answer, Question};
use std::sync::Arc;

/// Asks each handler in turn; the first answer wins.
#[derive(Default)]
pub struct ChainHandler {
    handlers: Vec<Arc<dyn QuestionHandler>>,
}

impl ChainHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, handler: Arc<dyn QuestionHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[async_trait]
impl QuestionHandler for ChainHandler {
    async fn resolve(&self, question: &Question) -> Option<Answer> {
        for handler in &self.handlers {
            if let Some(answer) = handler.resolve(question).await {
                return Some(answer);
            }
        }
        None
    }
}
