pub mod indexed;
pub mod snapshot;

pub use indexed::{IndexedRegistry, RegistryStore};
pub use snapshot::{SnapshotLoader, SnapshotSummary};
