use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS response code (RCODE) as registered with IANA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnCode(pub i32);

impl ReturnCode {
    pub const SUCCESS: ReturnCode = ReturnCode(0);
    pub const FORMAT_ERROR: ReturnCode = ReturnCode(1);
    pub const SERVER_FAILURE: ReturnCode = ReturnCode(2);
    pub const NAME_ERROR: ReturnCode = ReturnCode(3);
    pub const NOT_IMPLEMENTED: ReturnCode = ReturnCode(4);
    pub const REFUSED: ReturnCode = ReturnCode(5);
    pub const YX_DOMAIN: ReturnCode = ReturnCode(6);
    pub const YX_RRSET: ReturnCode = ReturnCode(7);
    pub const NX_RRSET: ReturnCode = ReturnCode(8);
    pub const NOT_AUTH: ReturnCode = ReturnCode(9);
    pub const NOT_ZONE: ReturnCode = ReturnCode(10);
    pub const BAD_SIG: ReturnCode = ReturnCode(16);
    pub const BAD_VERS: ReturnCode = ReturnCode(16);
    pub const BAD_KEY: ReturnCode = ReturnCode(17);
    pub const BAD_TIME: ReturnCode = ReturnCode(18);
    pub const BAD_MODE: ReturnCode = ReturnCode(19);
    pub const BAD_NAME: ReturnCode = ReturnCode(20);
    pub const BAD_ALG: ReturnCode = ReturnCode(21);
    pub const BAD_TRUNC: ReturnCode = ReturnCode(22);
    pub const BAD_COOKIE: ReturnCode = ReturnCode(23);

    /// IANA mnemonic, `None` for unassigned codes.
    ///
    /// 16 is registered twice (BADSIG and BADVERS); it always renders as
    /// BADSIG.
    pub fn mnemonic(&self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            6 => "YXDOMAIN",
            7 => "YXRRSET",
            8 => "NXRRSET",
            9 => "NOTAUTH",
            10 => "NOTZONE",
            16 => "BADSIG",
            17 => "BADKEY",
            18 => "BADTIME",
            19 => "BADMODE",
            20 => "BADNAME",
            21 => "BADALG",
            22 => "BADTRUNC",
            23 => "BADCOOKIE",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic().unwrap_or("UNKNOWN"))
    }
}

impl From<i32> for ReturnCode {
    fn from(code: i32) -> Self {
        ReturnCode(code)
    }
}
