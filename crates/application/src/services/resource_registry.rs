use gateway_dns_domain::{DomainError, ResourceKind};
use std::sync::Arc;
use tracing::debug;

use crate::ports::AddressRegistry;

/// One address source tagged with its kind.
#[derive(Clone)]
pub struct ResourceSource {
    pub kind: ResourceKind,
    pub registry: Arc<dyn AddressRegistry>,
}

impl ResourceSource {
    pub fn new(kind: ResourceKind, registry: Arc<dyn AddressRegistry>) -> Self {
        Self { kind, registry }
    }
}

impl std::fmt::Debug for ResourceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceSource")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Fixed, precedence-ordered set of address sources.
///
/// Sources are ordered by tier, and route kinds within their tier follow the
/// fixed HTTPRoute, TLSRoute, GRPCRoute order. Configuration only decides
/// which kinds are present. The set never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    sources: Vec<ResourceSource>,
}

impl ResourceRegistry {
    pub fn new(mut sources: Vec<ResourceSource>) -> Self {
        sources.sort_by_key(|source| source.kind.rank());
        Self { sources }
    }

    /// Build the registry from configured kind names.
    ///
    /// Any name outside the supported set fails with
    /// [`DomainError::UnsupportedResource`]. A kind listed twice is kept once.
    pub fn from_enabled<S, F>(names: &[S], mut factory: F) -> Result<Self, DomainError>
    where
        S: AsRef<str>,
        F: FnMut(ResourceKind) -> Arc<dyn AddressRegistry>,
    {
        let mut sources: Vec<ResourceSource> = Vec::with_capacity(names.len());
        for name in names {
            let kind: ResourceKind = name.as_ref().parse()?;
            if sources.iter().any(|s| s.kind == kind) {
                debug!(kind = kind.as_str(), "Duplicate resource kind ignored");
                continue;
            }
            sources.push(ResourceSource::new(kind, factory(kind)));
        }
        Ok(Self::new(sources))
    }

    pub fn sources(&self) -> &[ResourceSource] {
        &self.sources
    }

    pub fn lookup_resource(&self, kind: ResourceKind) -> Option<&ResourceSource> {
        self.sources.iter().find(|s| s.kind == kind)
    }

    pub fn kinds(&self) -> Vec<ResourceKind> {
        self.sources.iter().map(|s| s.kind).collect()
    }
}
