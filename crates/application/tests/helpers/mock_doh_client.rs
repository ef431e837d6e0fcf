#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_doh_application::ports::DohClientPort;
use ferrous_doh_domain::{Answer, ClientError, Exchange, Question};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted upstream: answers by question name, records every question.
#[derive(Clone, Default)]
pub struct MockDohClient {
    answers: Arc<Mutex<HashMap<String, Answer>>>,
    failing: Arc<Mutex<bool>>,
    received: Arc<Mutex<Vec<Question>>>,
    rtt: Arc<Mutex<Option<Duration>>>,
}

impl MockDohClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, name: &str, answer: Answer) {
        self.answers
            .lock()
            .unwrap()
            .insert(name.to_string(), answer);
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn set_rtt(&self, rtt: Duration) {
        *self.rtt.lock().unwrap() = Some(rtt);
    }

    pub fn received(&self) -> Vec<Question> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl DohClientPort for MockDohClient {
    async fn query(&self, question: &Question) -> Exchange {
        self.received.lock().unwrap().push(question.clone());

        let result = if *self.failing.lock().unwrap() {
            Err(ClientError::Http(502))
        } else {
            self.answers
                .lock()
                .unwrap()
                .get(&question.name)
                .cloned()
                .ok_or(ClientError::Http(404))
        };

        Exchange {
            result,
            rtt: self
                .rtt
                .lock()
                .unwrap()
                .unwrap_or(Duration::from_millis(3)),
        }
    }
}
