use crate::ports::{DohClientPort, QuestionHandler};
use async_trait::async_trait;
use ferrous_doh_domain::{Answer, Question};
use std::sync::Arc;
use tracing::{debug, warn};

/// Relays questions to an upstream DoH JSON server.
///
/// Upstream failures are logged and reported as no answer, which the server
/// turns into SERVFAIL.
pub struct ForwardingHandler {
    client: Arc<dyn DohClientPort>,
}

impl ForwardingHandler {
    pub fn new(client: Arc<dyn DohClientPort>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuestionHandler for ForwardingHandler {
    async fn resolve(&self, question: &Question) -> Option<Answer> {
        let exchange = self.client.query(question).await;
        let rtt_ms = u64::try_from(exchange.rtt.as_millis()).unwrap_or(u64::MAX);

        match exchange.result {
            Ok(answer) => {
                debug!(
                    name = %question.name,
                    record_type = %question.record_type,
                    status = %answer.status,
                    rtt_ms,
                    "Upstream answered"
                );
                Some(answer)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    name = %question.name,
                    record_type = %question.record_type,
                    rtt_ms,
                    "Upstream DoH query failed"
                );
                None
            }
        }
    }
}
