use crate::dns_record::{Record, ReturnCode};
use crate::question::Question;
use serde::{Deserialize, Deserializer, Serialize};

/// Full response to a [`Question`], as returned to (or received by) a client.
///
/// The flag fields mirror the DNS header bits of the upstream response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Answer {
    /// DNS response code (RCODE).
    #[serde(rename = "Status")]
    pub status: ReturnCode,

    /// The upstream reply did not fit in a single UDP or TCP message.
    #[serde(rename = "TC")]
    pub truncated: bool,

    #[serde(rename = "RD")]
    pub recursion_desired: bool,

    #[serde(rename = "RA")]
    pub recursion_available: bool,

    /// All response data was validated with DNSSEC.
    #[serde(rename = "AD")]
    pub dnssec_validated: bool,

    /// The client asked for DNSSEC validation to be disabled.
    #[serde(rename = "CD")]
    pub dnssec_disabled: bool,

    #[serde(rename = "Question", deserialize_with = "null_as_empty")]
    pub question: Vec<Question>,

    #[serde(rename = "Answer", deserialize_with = "null_as_empty")]
    pub answer: Vec<Record>,

    #[serde(
        rename = "Authority",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub authority: Vec<Record>,

    #[serde(
        rename = "Additional",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub additional: Vec<Record>,

    #[serde(rename = "Comment", skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub edns_client_subnet: String,
}

impl Answer {
    /// Answer sent when nothing could be resolved: SERVFAIL, everything else
    /// left at its default.
    pub fn server_failure() -> Self {
        Self {
            status: ReturnCode::SERVER_FAILURE,
            ..Default::default()
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
