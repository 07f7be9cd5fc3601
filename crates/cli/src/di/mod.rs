use gateway_dns_application::ports::AddressRegistry;
use gateway_dns_application::services::{ResolutionEngine, ResourceRegistry};
use gateway_dns_application::use_cases::{HandleGatewayQueryUseCase, ReloadRegistriesUseCase};
use gateway_dns_domain::{Config, ZoneMatcher};
use gateway_dns_infrastructure::registry::{RegistryStore, SnapshotLoader};
use gateway_dns_infrastructure::system::{ConfiguredSelfAddress, SyncFlag};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Everything the server and the background jobs need, wired from config.
pub struct GatewayServices {
    pub handle_query: Arc<HandleGatewayQueryUseCase>,
    pub reload: Arc<ReloadRegistriesUseCase>,
}

impl GatewayServices {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let gateway = &config.gateway;

        let serial = u32::try_from(chrono::Utc::now().timestamp()).unwrap_or(u32::MAX);
        let zones = Arc::new(ZoneMatcher::new(gateway.build_zones(serial)?));

        let store = Arc::new(RegistryStore::new());
        let registry = ResourceRegistry::from_enabled(gateway.resources.as_slice(), |kind| {
            Arc::new(store.registry(kind)) as Arc<dyn AddressRegistry>
        })?;

        info!(
            zones = zones.zones().len(),
            kinds = ?registry.kinds(),
            "Resource registries built"
        );

        let sync = Arc::new(SyncFlag::new());
        let loader = SnapshotLoader::new(
            config.registry.snapshot_path.as_ref().map(PathBuf::from),
            store,
            registry.kinds(),
            Arc::clone(&sync),
        );

        let engine = Arc::new(ResolutionEngine::new(
            Arc::new(registry),
            Arc::clone(&zones),
            Arc::new(ConfiguredSelfAddress::new(gateway.authority_labels())),
            gateway.lookup_timeout(),
        ));

        let handle_query = Arc::new(HandleGatewayQueryUseCase::new(
            zones,
            engine,
            sync,
            gateway.fallthrough(),
        ));

        Ok(Self {
            handle_query,
            reload: Arc::new(ReloadRegistriesUseCase::new(Arc::new(loader))),
        })
    }
}
