use crate::RegistrySyncJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_registry_sync(RegistrySyncJob::new(reload, 30))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    registry_sync: Option<RegistrySyncJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            registry_sync: None,
        }
    }

    pub fn with_registry_sync(mut self, job: RegistrySyncJob) -> Self {
        self.registry_sync = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.registry_sync {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
