use gateway_dns_application::use_cases::ReloadRegistriesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Periodically reloads the address registries from their data source.
///
/// The initial load happens at startup, so the first reload runs one full
/// interval later.
pub struct RegistrySyncJob {
    reload: Arc<ReloadRegistriesUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl RegistrySyncJob {
    pub fn new(reload: Arc<ReloadRegistriesUseCase>, interval_secs: u64) -> Self {
        Self {
            reload,
            interval: Duration::from_secs(interval_secs),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting registry sync job"
        );

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RegistrySyncJob: shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        if let Err(e) = self.reload.execute().await {
                            warn!(error = %e, "Registry reload failed, keeping previous data");
                        }
                    }
                }
            }
        });
    }
}
