use gateway_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RegistrySource;

pub struct ReloadRegistriesUseCase {
    source: Arc<dyn RegistrySource>,
}

impl ReloadRegistriesUseCase {
    pub fn new(source: Arc<dyn RegistrySource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let keys = self.source.reload().await?;
        debug!(keys, "Registries reloaded");
        Ok(keys)
    }
}
