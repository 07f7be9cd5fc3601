use async_trait::async_trait;
use gateway_dns_application::ports::{ReadinessProbe, RegistrySource};
use gateway_dns_domain::validators::validate_domain_name;
use gateway_dns_domain::{DomainError, LookupKey, ResourceKind};
use serde::Deserialize;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::indexed::{KindIndexes, RegistryStore};
use crate::system::SyncFlag;

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    resources: Vec<ResourceEntry>,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    kind: String,
    #[serde(default)]
    hostnames: Vec<String>,
    #[serde(default)]
    addresses: Vec<String>,
}

/// Counts from one successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub resources: usize,
    pub keys: usize,
}

/// Parsed snapshot, one index per kind.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub resources: usize,
    pub indexes: KindIndexes,
}

/// Feeds the registry store from a TOML snapshot of resource objects.
///
/// A reload publishes every enabled kind in one swap, or nothing at all.
/// The first successful load marks the data store as synchronized.
pub struct SnapshotLoader {
    path: Option<PathBuf>,
    store: Arc<RegistryStore>,
    enabled: Vec<ResourceKind>,
    sync: Arc<SyncFlag>,
}

impl SnapshotLoader {
    pub fn new(
        path: Option<PathBuf>,
        store: Arc<RegistryStore>,
        enabled: Vec<ResourceKind>,
        sync: Arc<SyncFlag>,
    ) -> Self {
        Self {
            path,
            store,
            enabled,
            sync,
        }
    }

    /// Parse and validate a snapshot without publishing it.
    pub fn parse(content: &str) -> Result<Snapshot, DomainError> {
        let file: SnapshotFile = toml::from_str(content)
            .map_err(|e| DomainError::RegistrySnapshot(e.to_string()))?;

        let mut snapshot = Snapshot {
            resources: file.resources.len(),
            indexes: KindIndexes::default(),
        };

        for entry in file.resources {
            let kind: ResourceKind = entry.kind.parse()?;

            let addresses = entry
                .addresses
                .iter()
                .map(|raw| {
                    raw.trim()
                        .parse::<IpAddr>()
                        .map_err(|_| DomainError::InvalidIpAddress(raw.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let index = snapshot.indexes.entry(kind).or_default();
            for hostname in &entry.hostnames {
                validate_domain_name(hostname).map_err(DomainError::InvalidDomainName)?;
                let merged = index.entry(LookupKey::new(hostname)).or_default();
                for addr in &addresses {
                    if !merged.contains(addr) {
                        merged.push(*addr);
                    }
                }
            }
        }

        Ok(snapshot)
    }

    /// Load the snapshot file and publish it.
    ///
    /// Without a configured path the registries stay empty and the store
    /// counts as synchronized.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<SnapshotSummary, DomainError> {
        let Some(path) = &self.path else {
            self.sync.mark_synced();
            return Ok(SnapshotSummary::default());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {e}", path.display())))?;

        let snapshot = Self::parse(&content)?;
        let mut published = KindIndexes::default();

        for (kind, index) in snapshot.indexes {
            if self.enabled.contains(&kind) {
                published.insert(kind, index);
            } else {
                debug!(kind = kind.as_str(), "Snapshot entries for disabled kind ignored");
            }
        }

        let keys: usize = published.values().map(|index| index.len()).sum();
        self.store.publish(published);

        let summary = SnapshotSummary {
            resources: snapshot.resources,
            keys,
        };

        if !self.sync.has_synced() {
            info!(
                resources = summary.resources,
                keys = summary.keys,
                "Initial registry snapshot loaded"
            );
        }
        self.sync.mark_synced();

        Ok(summary)
    }
}

#[async_trait]
impl RegistrySource for SnapshotLoader {
    async fn reload(&self) -> Result<usize, DomainError> {
        SnapshotLoader::reload(self).await.map(|summary| summary.keys)
    }
}
