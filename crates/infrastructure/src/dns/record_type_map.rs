use gateway_dns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert hickory RecordType → domain RecordType (for incoming queries).
    ///
    /// Types the gateway has no dedicated variant for keep their numeric code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::SOA => RecordType::SOA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::SRV => RecordType::SRV,
            HickoryRecordType::ANY => RecordType::ANY,
            other => RecordType::Unknown(u16::from(other)),
        }
    }
}
