//! Configuration module for Gateway DNS
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener address and ports
//! - `gateway`: Zones, SOA parameters, resource kinds and fallthrough
//! - `registry`: Registry snapshot source and resync interval
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod gateway;
pub mod logging;
pub mod registry;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use gateway::GatewayConfig;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
