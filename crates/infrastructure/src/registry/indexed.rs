use arc_swap::ArcSwap;
use async_trait::async_trait;
use gateway_dns_application::ports::AddressRegistry;
use gateway_dns_domain::{LookupKey, ResourceKind};
use rustc_hash::FxHashMap;
use std::net::IpAddr;
use std::sync::Arc;

pub type AddressIndex = FxHashMap<LookupKey, Vec<IpAddr>>;
pub type KindIndexes = FxHashMap<ResourceKind, AddressIndex>;

/// Address indexes for every resource kind, published as one generation.
///
/// A reload swaps all kinds at once; readers never wait on a writer and
/// never observe one kind from a newer snapshot than another.
pub struct RegistryStore {
    indexes: ArcSwap<KindIndexes>,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self {
            indexes: ArcSwap::from_pointee(KindIndexes::default()),
        }
    }

    pub fn publish(&self, indexes: KindIndexes) {
        self.indexes.store(Arc::new(indexes));
    }

    /// Registry view over one kind of this store.
    pub fn registry(self: &Arc<Self>, kind: ResourceKind) -> IndexedRegistry {
        IndexedRegistry {
            kind,
            store: Arc::clone(self),
        }
    }

    fn len_of(&self, kind: ResourceKind) -> usize {
        self.indexes.load().get(&kind).map_or(0, |index| index.len())
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory address source for one resource kind.
pub struct IndexedRegistry {
    kind: ResourceKind,
    store: Arc<RegistryStore>,
}

impl IndexedRegistry {
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.store.len_of(self.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AddressRegistry for IndexedRegistry {
    async fn lookup(&self, key: &LookupKey) -> Option<Vec<IpAddr>> {
        self.store
            .indexes
            .load()
            .get(&self.kind)
            .and_then(|index| index.get(key))
            .cloned()
    }
}
