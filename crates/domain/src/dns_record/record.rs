use super::RecordType;
use serde::{Deserialize, Serialize};

/// A single resource record from one of the answer sections.
///
/// `data` is the record data in presentation form (dotted quad for A, free
/// text for TXT, ...). It is carried as-is and never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Seconds. Negative values from upstream are carried through as-is.
    #[serde(rename = "TTL")]
    pub ttl: i64,

    pub data: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: i64,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}
