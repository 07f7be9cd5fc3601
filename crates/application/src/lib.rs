//! Gateway DNS Application Layer
//!
//! Ports for the external collaborators (address registries, self address,
//! readiness) and the services that resolve a query against them.
pub mod ports;
pub mod services;
pub mod use_cases;
