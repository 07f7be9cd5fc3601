use super::RecordType;
use std::sync::Arc;

/// DNS query (name + record type).
/// The name keeps the bytes the client sent; case folding happens at match time.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
