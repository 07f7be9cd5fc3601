use gateway_dns_domain::Zone;
use std::sync::Arc;

/// Supplies the hostnames this server is reachable as inside a zone.
/// Used for the NS answer at the zone apex.
pub trait SelfAddressProvider: Send + Sync {
    /// Fully qualified hostnames, primary first.
    fn authority_hosts(&self, zone: &Zone) -> Vec<Arc<str>>;
}
