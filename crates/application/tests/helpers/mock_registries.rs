use async_trait::async_trait;
use gateway_dns_application::ports::{AddressRegistry, ReadinessProbe, SelfAddressProvider};
use gateway_dns_application::services::{ResolutionEngine, ResourceRegistry, ResourceSource};
use gateway_dns_application::use_cases::HandleGatewayQueryUseCase;
use gateway_dns_domain::{
    names, Fallthrough, LookupKey, ResourceKind, SoaParams, Zone, ZoneMatcher,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Mock AddressRegistry
// ============================================================================

#[derive(Default)]
pub struct MockRegistry {
    entries: HashMap<String, Vec<IpAddr>>,
    calls: AtomicUsize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &[&str])]) -> Self {
        let entries = entries
            .iter()
            .map(|(key, addrs)| {
                (
                    LookupKey::new(key).as_str().to_string(),
                    addrs.iter().map(|a| a.parse().unwrap()).collect(),
                )
            })
            .collect();
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressRegistry for MockRegistry {
    async fn lookup(&self, key: &LookupKey) -> Option<Vec<IpAddr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.get(key.as_str()).cloned()
    }
}

/// Never answers within any reasonable bound.
pub struct StallingRegistry {
    pub delay: Duration,
}

#[async_trait]
impl AddressRegistry for StallingRegistry {
    async fn lookup(&self, _key: &LookupKey) -> Option<Vec<IpAddr>> {
        tokio::time::sleep(self.delay).await;
        Some(vec!["203.0.113.1".parse().unwrap()])
    }
}

// ============================================================================
// Mock collaborators
// ============================================================================

pub struct MockSelfAddress {
    labels: Vec<String>,
}

impl MockSelfAddress {
    pub fn new(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl SelfAddressProvider for MockSelfAddress {
    fn authority_hosts(&self, zone: &Zone) -> Vec<Arc<str>> {
        self.labels
            .iter()
            .map(|label| Arc::from(names::join(label, zone.origin())))
            .collect()
    }
}

pub struct MockReadiness(AtomicBool);

impl MockReadiness {
    pub fn new(synced: bool) -> Self {
        Self(AtomicBool::new(synced))
    }

    pub fn set(&self, synced: bool) {
        self.0.store(synced, Ordering::SeqCst);
    }
}

impl ReadinessProbe for MockReadiness {
    fn has_synced(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub const SERIAL: u32 = 1499347823;

pub fn example_zone() -> Zone {
    zone("example.com.")
}

pub fn zone(origin: &str) -> Zone {
    Zone::new(
        origin,
        60,
        60,
        SoaParams {
            mname: Arc::from(names::join("dns1.kube-system", origin)),
            rname: Arc::from(names::join("hostmaster", origin)),
            serial: SERIAL,
            refresh: 7200,
            retry: 1800,
            expire: 86400,
            minimum: 5,
        },
    )
}

pub fn service_registry() -> MockRegistry {
    MockRegistry::with_entries(&[
        ("svc1.ns1", &["192.0.1.1", "fd12:3456:789a:1::"]),
        ("svc2.ns1", &["192.0.1.2"]),
        ("svc3.ns1", &[]),
        ("dns1.kube-system", &["192.0.1.53"]),
    ])
}

pub fn ingress_registry() -> MockRegistry {
    MockRegistry::with_entries(&[
        ("domain.example.com", &["192.0.0.1"]),
        ("svc2.ns1.example.com", &["192.0.0.2"]),
        ("example.com", &["192.0.0.3"]),
        ("shadow.example.com", &["192.0.0.4"]),
        ("shadow-vs.example.com", &["192.0.0.5"]),
    ])
}

pub fn route_registry() -> MockRegistry {
    MockRegistry::with_entries(&[
        ("domain.gw.example.com", &["192.0.2.1"]),
        ("shadow.example.com", &["192.0.2.4"]),
    ])
}

pub fn endpoint_registry() -> MockRegistry {
    MockRegistry::with_entries(&[
        ("domain.endpoint.example.com", &["192.0.4.1"]),
        ("endpoint.example.com", &["192.0.4.4"]),
    ])
}

/// Registries of every kind populated with the shared fixture data.
/// Route kinds share one registry.
pub fn fixture_sources() -> Vec<ResourceSource> {
    let routes: Arc<dyn AddressRegistry> = Arc::new(route_registry());
    vec![
        ResourceSource::new(ResourceKind::Service, Arc::new(service_registry())),
        ResourceSource::new(ResourceKind::Ingress, Arc::new(ingress_registry())),
        ResourceSource::new(ResourceKind::HttpRoute, Arc::clone(&routes)),
        ResourceSource::new(ResourceKind::TlsRoute, Arc::clone(&routes)),
        ResourceSource::new(ResourceKind::GrpcRoute, routes),
        ResourceSource::new(ResourceKind::DnsEndpoint, Arc::new(endpoint_registry())),
    ]
}

pub struct Fixture {
    pub zones: Arc<ZoneMatcher>,
    pub engine: Arc<ResolutionEngine>,
    pub readiness: Arc<MockReadiness>,
}

impl Fixture {
    pub fn new(sources: Vec<ResourceSource>) -> Self {
        Self::with_timeout(sources, Duration::from_secs(2))
    }

    pub fn with_timeout(sources: Vec<ResourceSource>, timeout: Duration) -> Self {
        let zones = Arc::new(ZoneMatcher::new(vec![example_zone()]));
        let engine = Arc::new(ResolutionEngine::new(
            Arc::new(ResourceRegistry::new(sources)),
            Arc::clone(&zones),
            Arc::new(MockSelfAddress::new(&["dns1.kube-system"])),
            timeout,
        ));
        Self {
            zones,
            engine,
            readiness: Arc::new(MockReadiness::new(true)),
        }
    }

    pub fn use_case(&self, fallthrough: Fallthrough) -> HandleGatewayQueryUseCase {
        HandleGatewayQueryUseCase::new(
            Arc::clone(&self.zones),
            Arc::clone(&self.engine),
            self.readiness.clone(),
            fallthrough,
        )
    }
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn empty_registry(_kind: ResourceKind) -> Arc<dyn AddressRegistry> {
    Arc::new(MockRegistry::new())
}
