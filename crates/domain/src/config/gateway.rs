use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::names;
use crate::{DomainError, Fallthrough, ResourceKind, SoaParams, Zone};

/// Authoritative zone and resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Zones this server answers for (e.g. "example.com.")
    #[serde(default)]
    pub zones: Vec<String>,

    /// Enabled registry kinds. Order within a precedence tier is kept.
    #[serde(default = "default_resources")]
    pub resources: Vec<String>,

    /// Label(s) of this server's own hostname below each zone
    #[serde(default = "default_apex")]
    pub apex: String,

    /// Optional second authoritative hostname below each zone
    #[serde(default)]
    pub secondary: Option<String>,

    /// SOA mailbox label below each zone
    #[serde(default = "default_hostmaster")]
    pub hostmaster: String,

    /// TTL of A/AAAA answers
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// TTL of SOA, NS and glue records
    #[serde(default = "default_ttl")]
    pub soa_ttl: u32,

    /// SOA serial. Defaults to the load time in unix seconds.
    #[serde(default)]
    pub serial: Option<u32>,

    #[serde(default = "default_refresh")]
    pub refresh: i32,

    #[serde(default = "default_retry")]
    pub retry: i32,

    #[serde(default = "default_expire")]
    pub expire: i32,

    /// SOA minimum (negative caching) TTL
    #[serde(default = "default_minimum_ttl")]
    pub minimum_ttl: u32,

    /// Zones for which unknown names are passed to the next handler.
    /// `["."]` covers everything; empty disables fallthrough.
    #[serde(default)]
    pub fallthrough: Vec<String>,

    /// Upper bound for a single registry lookup in milliseconds
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,
}

impl GatewayConfig {
    /// Build the immutable zone set. `serial` is used when none is configured.
    pub fn build_zones(&self, fallback_serial: u32) -> Result<Vec<Zone>, DomainError> {
        let serial = self.serial.unwrap_or(fallback_serial);

        self.zones
            .iter()
            .map(|origin| {
                crate::validators::validate_domain_name(origin)
                    .map_err(DomainError::InvalidZone)?;
                let soa = SoaParams {
                    mname: Arc::from(names::join(&self.apex, origin)),
                    rname: Arc::from(names::join(&self.hostmaster, origin)),
                    serial,
                    refresh: self.refresh,
                    retry: self.retry,
                    expire: self.expire,
                    minimum: self.minimum_ttl,
                };
                Ok(Zone::new(origin, self.ttl, self.soa_ttl, soa))
            })
            .collect()
    }

    /// Parse the enabled kinds, failing on the first unsupported name.
    pub fn resource_kinds(&self) -> Result<Vec<ResourceKind>, DomainError> {
        self.resources.iter().map(|r| r.parse()).collect()
    }

    pub fn fallthrough(&self) -> Fallthrough {
        Fallthrough::new(&self.fallthrough)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Authoritative host labels, primary first.
    pub fn authority_labels(&self) -> Vec<&str> {
        let mut labels = vec![self.apex.as_str()];
        if let Some(ref secondary) = self.secondary {
            labels.push(secondary.as_str());
        }
        labels
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            zones: vec![],
            resources: default_resources(),
            apex: default_apex(),
            secondary: None,
            hostmaster: default_hostmaster(),
            ttl: default_ttl(),
            soa_ttl: default_ttl(),
            serial: None,
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minimum_ttl: default_minimum_ttl(),
            fallthrough: vec![],
            lookup_timeout_ms: default_lookup_timeout(),
        }
    }
}

fn default_resources() -> Vec<String> {
    ResourceKind::supported_names()
}

fn default_apex() -> String {
    "dns1.kube-system".to_string()
}

fn default_hostmaster() -> String {
    "hostmaster".to_string()
}

fn default_ttl() -> u32 {
    60
}

fn default_refresh() -> i32 {
    7200
}

fn default_retry() -> i32 {
    1800
}

fn default_expire() -> i32 {
    86400
}

fn default_minimum_ttl() -> u32 {
    5
}

fn default_lookup_timeout() -> u64 {
    2000
}
