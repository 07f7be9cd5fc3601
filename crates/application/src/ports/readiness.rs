/// Reports whether the backing data store finished its initial load.
pub trait ReadinessProbe: Send + Sync {
    fn has_synced(&self) -> bool;
}
