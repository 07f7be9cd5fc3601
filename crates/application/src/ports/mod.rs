mod address_registry;
mod readiness;
mod registry_source;
mod self_address;

pub use address_registry::AddressRegistry;
pub use readiness::ReadinessProbe;
pub use registry_source::RegistrySource;
pub use self_address::SelfAddressProvider;
