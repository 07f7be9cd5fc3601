use async_trait::async_trait;
use gateway_dns_application::ports::RegistrySource;
use gateway_dns_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// ============================================================================
// Mock RegistrySource
// ============================================================================

#[derive(Default)]
pub struct MockRegistrySource {
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl MockRegistrySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let source = Self::default();
        source.fail.store(true, Ordering::SeqCst);
        source
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrySource for MockRegistrySource {
    async fn reload(&self) -> Result<usize, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::RegistrySnapshot("mock failure".to_string()));
        }
        Ok(3)
    }
}
