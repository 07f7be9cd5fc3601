use async_trait::async_trait;
use gateway_dns_domain::LookupKey;
use std::net::IpAddr;

/// Lookup capability of a single address source.
///
/// `None` means the key is unknown to this source. `Some(vec![])` means the
/// key is recognized but currently publishes no addresses. Implementations
/// must keep the two apart and must be safe to call concurrently.
#[async_trait]
pub trait AddressRegistry: Send + Sync {
    async fn lookup(&self, key: &LookupKey) -> Option<Vec<IpAddr>>;
}
