use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Numerical DNS resource record type as registered with IANA.
///
/// Any value is representable so that types unknown to this crate still
/// round-trip through the JSON format. `RecordType::default()` is the zero
/// sentinel produced when decoding an empty mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RecordType(pub i32);

impl RecordType {
    /// Returned by [`RecordType::from_name`] for unregistered mnemonics.
    pub const UNKNOWN: RecordType = RecordType(-1);

    pub const A: RecordType = RecordType(1);
    pub const NS: RecordType = RecordType(2);
    pub const CNAME: RecordType = RecordType(5);
    pub const SOA: RecordType = RecordType(6);
    pub const PTR: RecordType = RecordType(12);
    pub const HINFO: RecordType = RecordType(13);
    pub const MX: RecordType = RecordType(15);
    pub const TXT: RecordType = RecordType(16);
    pub const RP: RecordType = RecordType(17);
    pub const AFSDB: RecordType = RecordType(18);
    pub const SIG: RecordType = RecordType(24);
    pub const KEY: RecordType = RecordType(25);
    pub const AAAA: RecordType = RecordType(28);
    pub const LOC: RecordType = RecordType(29);
    pub const SRV: RecordType = RecordType(33);
    pub const NAPTR: RecordType = RecordType(35);
    pub const KX: RecordType = RecordType(36);
    pub const CERT: RecordType = RecordType(37);
    pub const DNAME: RecordType = RecordType(39);
    pub const OPT: RecordType = RecordType(41);
    pub const APL: RecordType = RecordType(42);
    pub const DS: RecordType = RecordType(43);
    pub const SSHFP: RecordType = RecordType(44);
    pub const IPSECKEY: RecordType = RecordType(45);
    pub const RRSIG: RecordType = RecordType(46);
    pub const NSEC: RecordType = RecordType(47);
    pub const DNSKEY: RecordType = RecordType(48);
    pub const DHCID: RecordType = RecordType(49);
    pub const NSEC3: RecordType = RecordType(50);
    pub const NSEC3PARAM: RecordType = RecordType(51);
    pub const TLSA: RecordType = RecordType(52);
    pub const HIP: RecordType = RecordType(55);
    pub const CDS: RecordType = RecordType(59);
    pub const CDNSKEY: RecordType = RecordType(60);
    pub const OPENPGPKEY: RecordType = RecordType(61);
    pub const SPF: RecordType = RecordType(99);
    pub const TKEY: RecordType = RecordType(249);
    pub const TSIG: RecordType = RecordType(250);
    pub const IXFR: RecordType = RecordType(251);
    pub const AXFR: RecordType = RecordType(252);
    pub const ANY: RecordType = RecordType(255);
    pub const URI: RecordType = RecordType(256);
    pub const CAA: RecordType = RecordType(257);
    pub const TA: RecordType = RecordType(32768);
    pub const DLV: RecordType = RecordType(32769);

    /// Looks up a record type by its upper-case mnemonic.
    ///
    /// Matching is exact and case-sensitive; anything unregistered yields
    /// [`RecordType::UNKNOWN`].
    pub fn from_name(name: &str) -> Self {
        RECORD_TYPES
            .iter()
            .find(|(mnemonic, _)| *mnemonic == name)
            .map(|(_, rr)| *rr)
            .unwrap_or(Self::UNKNOWN)
    }

    /// Registered mnemonic for this code, first registration wins.
    pub fn name(&self) -> Option<&'static str> {
        RECORD_TYPES
            .iter()
            .find(|(_, rr)| rr == self)
            .map(|(mnemonic, _)| *mnemonic)
    }

    /// Parses a command-line style argument: a mnemonic or a decimal code.
    pub fn parse_arg(arg: &str) -> Option<Self> {
        match Self::from_name(arg) {
            Self::UNKNOWN => arg.parse::<i32>().ok().map(RecordType),
            rr => Some(rr),
        }
    }

    pub fn code(&self) -> i32 {
        self.0
    }
}

const RECORD_TYPES: &[(&str, RecordType)] = &[
    ("A", RecordType::A),
    ("NS", RecordType::NS),
    ("CNAME", RecordType::CNAME),
    ("SOA", RecordType::SOA),
    ("PTR", RecordType::PTR),
    ("HINFO", RecordType::HINFO),
    ("MX", RecordType::MX),
    ("TXT", RecordType::TXT),
    ("RP", RecordType::RP),
    ("AFSDB", RecordType::AFSDB),
    ("SIG", RecordType::SIG),
    ("KEY", RecordType::KEY),
    ("AAAA", RecordType::AAAA),
    ("LOC", RecordType::LOC),
    ("SRV", RecordType::SRV),
    ("NAPTR", RecordType::NAPTR),
    ("KX", RecordType::KX),
    ("CERT", RecordType::CERT),
    ("DNAME", RecordType::DNAME),
    ("OPT", RecordType::OPT),
    ("APL", RecordType::APL),
    ("DS", RecordType::DS),
    ("SSHFP", RecordType::SSHFP),
    ("IPSECKEY", RecordType::IPSECKEY),
    ("RRSIG", RecordType::RRSIG),
    ("NSEC", RecordType::NSEC),
    ("DNSKEY", RecordType::DNSKEY),
    ("DHCID", RecordType::DHCID),
    ("NSEC3", RecordType::NSEC3),
    ("NSEC3PARAM", RecordType::NSEC3PARAM),
    ("TLSA", RecordType::TLSA),
    ("HIP", RecordType::HIP),
    ("CDS", RecordType::CDS),
    ("CDNSKEY", RecordType::CDNSKEY),
    ("OPENPGPKEY", RecordType::OPENPGPKEY),
    ("SPF", RecordType::SPF),
    ("TKEY", RecordType::TKEY),
    ("TSIG", RecordType::TSIG),
    ("IXFR", RecordType::IXFR),
    ("AXFR", RecordType::AXFR),
    ("ANY", RecordType::ANY),
    ("URI", RecordType::URI),
    ("CAA", RecordType::CAA),
    ("TA", RecordType::TA),
    ("DLV", RecordType::DLV),
];

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown({})", self.0),
        }
    }
}

impl From<i32> for RecordType {
    fn from(code: i32) -> Self {
        RecordType(code)
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The token kind decides the form: numbers are codes, strings are
        // mnemonics.
        deserializer.deserialize_any(RecordTypeVisitor)
    }
}

struct RecordTypeVisitor;

impl<'de> Visitor<'de> for RecordTypeVisitor {
    type Value = RecordType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a numeric record type or a record type mnemonic")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RecordType, E> {
        i32::try_from(v)
            .map(RecordType)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RecordType, E> {
        i32::try_from(v)
            .map(RecordType)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RecordType, E> {
        Ok(RecordType::default())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordType, E> {
        if v.is_empty() {
            return Ok(RecordType::default());
        }

        match RecordType::from_name(v) {
            RecordType::UNKNOWN => Err(E::custom("unknown record type")),
            rr => Ok(rr),
        }
    }
}
