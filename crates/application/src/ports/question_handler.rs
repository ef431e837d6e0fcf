use async_trait::async_trait;
use ferrous_doh_domain::{Answer, Question};

/// Resolution logic supplied by the embedding application.
///
/// Called once for every DoH request that passed validation. `None` means no
/// answer is available and the client receives SERVFAIL. By the time this is
/// called the server has already committed to a 200 response, so
/// implementations must not fail in any other way.
#[async_trait]
pub trait QuestionHandler: Send + Sync {
    async fn resolve(&self, question: &Question) -> Option<Answer>;
}
