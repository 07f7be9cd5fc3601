use crate::RecordType;
use std::net::IpAddr;

/// Address family implied by an A or AAAA query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// `None` for every query type that is not A or AAAA.
    pub fn for_record_type(record_type: RecordType) -> Option<Self> {
        match record_type {
            RecordType::A => Some(AddressFamily::V4),
            RecordType::AAAA => Some(AddressFamily::V6),
            _ => None,
        }
    }

    /// Keep only the addresses of this family, preserving order.
    pub fn filter(&self, addresses: &[IpAddr]) -> Vec<IpAddr> {
        addresses
            .iter()
            .filter(|addr| AddressFamily::of(addr) == *self)
            .copied()
            .collect()
    }
}
