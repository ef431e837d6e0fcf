use crate::dns_record::{Record, RecordType};
use crate::fqdn::fqdn;
use serde::{Deserialize, Serialize};

/// A statically configured record served without asking upstream.
///
/// `type` accepts a mnemonic (`"AAAA"`) or a numeric code (`28`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalRecordConfig {
    pub name: String,

    #[serde(rename = "type", default = "default_record_type")]
    pub record_type: RecordType,

    #[serde(default)]
    pub ttl: Option<u32>,

    pub data: String,
}

impl LocalRecordConfig {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }

    pub fn to_record(&self) -> Record {
        Record::new(
            fqdn(&self.name),
            self.record_type,
            i64::from(self.ttl_or_default()),
            self.data.clone(),
        )
    }
}

fn default_record_type() -> RecordType {
    RecordType::A
}
