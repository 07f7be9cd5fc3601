use serde::{Deserialize, Serialize};

/// Where the address registries get their data from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// TOML snapshot of resource objects (see `SnapshotLoader`).
    /// When unset the registries stay empty and are considered synced.
    #[serde(default)]
    pub snapshot_path: Option<String>,

    /// How often the snapshot is re-read, in seconds (default: 30)
    #[serde(default = "default_reload_interval")]
    pub reload_interval_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            reload_interval_secs: default_reload_interval(),
        }
    }
}

fn default_reload_interval() -> u64 {
    30
}
