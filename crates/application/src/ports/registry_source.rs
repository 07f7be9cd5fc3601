use async_trait::async_trait;
use gateway_dns_domain::DomainError;

/// Data source that refreshes the address registries as a whole.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Publish fresh data, returning the number of keys now indexed.
    /// On error the previously published data must stay in place.
    async fn reload(&self) -> Result<usize, DomainError>;
}
