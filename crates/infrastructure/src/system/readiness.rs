use gateway_dns_application::ports::ReadinessProbe;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-way "initial sync complete" flag shared by the loader and the resolver.
#[derive(Debug, Default)]
pub struct SyncFlag(AtomicBool);

impl SyncFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_synced(&self) {
        self.0.store(true, Ordering::Release);
    }
}

impl ReadinessProbe for SyncFlag {
    fn has_synced(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
