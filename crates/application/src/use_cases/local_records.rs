use crate::ports::QuestionHandler;
use async_trait::async_trait;
use ferrous_doh_domain::{fqdn, Answer, Question, Record, RecordType, ReturnCode};
use std::collections::HashMap;
use tracing::debug;

/// Answers questions from a fixed table of records.
///
/// Names match case-insensitively and regardless of the trailing dot. A
/// question for ANY returns every record under the name. Nothing matching
/// means no answer, so a following handler gets its turn.
pub struct LocalRecordsHandler {
    records: HashMap<String, Vec<Record>>,
}

impl LocalRecordsHandler {
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        let mut by_name: HashMap<String, Vec<Record>> = HashMap::new();
        for record in records {
            by_name
                .entry(normalize(&record.name))
                .or_default()
                .push(record);
        }
        Self { records: by_name }
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, question: &Question) -> Vec<Record> {
        let Some(records) = self.records.get(&normalize(&question.name)) else {
            return Vec::new();
        };

        records
            .iter()
            .filter(|r| {
                question.record_type == RecordType::ANY || r.record_type == question.record_type
            })
            .cloned()
            .collect()
    }
}

fn normalize(name: &str) -> String {
    fqdn(name).to_ascii_lowercase()
}

#[async_trait]
impl QuestionHandler for LocalRecordsHandler {
    async fn resolve(&self, question: &Question) -> Option<Answer> {
        let records = self.lookup(question);
        if records.is_empty() {
            return None;
        }

        debug!(
            name = %question.name,
            record_type = %question.record_type,
            count = records.len(),
            "Answering from local records"
        );

        Some(Answer {
            status: ReturnCode::SUCCESS,
            recursion_desired: true,
            recursion_available: true,
            dnssec_disabled: question.disable_dnssec,
            question: vec![question.clone()],
            answer: records,
            ..Default::default()
        })
    }
}
