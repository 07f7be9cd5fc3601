pub mod gateway;
pub mod registry;

pub use gateway::{DelegateReason, HandleGatewayQueryUseCase, QueryDisposition, Resolution};
pub use registry::ReloadRegistriesUseCase;
