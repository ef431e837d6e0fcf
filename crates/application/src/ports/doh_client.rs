use async_trait::async_trait;
use ferrous_doh_domain::{Exchange, Question};

/// Outbound DNS-over-HTTPS JSON client. One attempt per call, no retries.
#[async_trait]
pub trait DohClientPort: Send + Sync {
    async fn query(&self, question: &Question) -> Exchange;
}
