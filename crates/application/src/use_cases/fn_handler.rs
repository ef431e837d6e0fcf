use crate::ports::QuestionHandler;
use async_trait::async_trait;
use ferrous_doh_domain::{Answer, Question};

/// Adapts a plain closure into a [`QuestionHandler`].
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&Question) -> Option<Answer> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> QuestionHandler for FnHandler<F>
where
    F: Fn(&Question) -> Option<Answer> + Send + Sync,
{
    async fn resolve(&self, question: &Question) -> Option<Answer> {
        (self.f)(question)
    }
}
