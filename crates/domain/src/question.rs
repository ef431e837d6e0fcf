use crate::dns_record::RecordType;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A single DNS question, either received by a server or sent by a client.
///
/// Only `name` is required. It SHOULD be fully qualified, but this is not
/// enforced anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    /// Hostname to resolve.
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// DNSSEC "Checking Disabled": the client asks to skip validation.
    #[serde(rename = "CD")]
    pub disable_dnssec: bool,

    /// IPv4/IPv6 subnet of the client when resolving on behalf of another
    /// client. Empty means not set.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub edns_client_subnet: String,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            ..Default::default()
        }
    }

    pub fn with_disable_dnssec(mut self, disable: bool) -> Self {
        self.disable_dnssec = disable;
        self
    }

    pub fn with_edns_client_subnet(mut self, subnet: impl Into<String>) -> Self {
        self.edns_client_subnet = subnet.into();
        self
    }

    /// Builds a question from URL query parameters.
    ///
    /// Only the first occurrence of each parameter counts. A `type` that is
    /// missing, unparsable or below 1 becomes A, and an unparsable `cd`
    /// becomes false. `name` is taken as-is.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut name = None;
        let mut record_type = None;
        let mut cd = None;
        let mut subnet = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut name,
                "type" => &mut record_type,
                "cd" => &mut cd,
                "edns_client_subnet" => &mut subnet,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }

        let record_type = record_type
            .and_then(|t| t.parse::<i32>().ok())
            .filter(|t| *t >= 1)
            .map(RecordType)
            .unwrap_or(RecordType::A);

        Self {
            name: name.unwrap_or_default(),
            record_type,
            disable_dnssec: cd.as_deref().and_then(parse_bool).unwrap_or(false),
            edns_client_subnet: subnet.unwrap_or_default(),
        }
    }

    /// Builds a question from a raw, percent-encoded query string.
    pub fn from_query(query: &str) -> Self {
        Self::from_query_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// URL query parameters for this question.
    ///
    /// `name` and `type` are always present (a type below 1 is sent as 1),
    /// `cd=1` only when DNSSEC checking is disabled and `edns_client_subnet`
    /// only when set.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let record_type = if self.record_type.code() > 0 {
            self.record_type.code()
        } else {
            RecordType::A.code()
        };

        let mut pairs = vec![
            ("name", self.name.clone()),
            ("type", record_type.to_string()),
        ];

        if self.disable_dnssec {
            pairs.push(("cd", "1".to_string()));
        }

        if !self.edns_client_subnet.is_empty() {
            pairs.push(("edns_client_subnet", self.edns_client_subnet.clone()));
        }

        pairs
    }

    /// Percent-encoded form of [`Question::to_query_pairs`].
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }
}

/// Boolean literals accepted for `cd`.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
