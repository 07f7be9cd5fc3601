use std::fmt;

/// Query types the gateway distinguishes.
///
/// Only A, AAAA, NS and SOA change the resolution path; everything else is
/// carried so that logs and responses can name it, and resolves to no-data
/// for recognized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    NS,
    SOA,
    CNAME,
    PTR,
    MX,
    TXT,
    SRV,
    ANY,
    Unknown(u16),
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::CNAME => "CNAME",
            RecordType::PTR => "PTR",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::SRV => "SRV",
            RecordType::ANY => "ANY",
            RecordType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(value) => write!(f, "TYPE{}", value),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
