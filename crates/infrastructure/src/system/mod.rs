pub mod readiness;
pub mod self_address;

pub use readiness::SyncFlag;
pub use self_address::ConfiguredSelfAddress;
