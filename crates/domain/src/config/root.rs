use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ConfigError, GatewayConfig, LoggingConfig, RegistryConfig, ServerConfig};
use crate::validators::validate_domain_name;

/// Root configuration, one section per concern.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub zones: Vec<String>,
}

impl Config {
    /// Load from `path` (defaults when `None` or missing) and apply overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if Path::new(p).exists() => {
                let content = std::fs::read_to_string(p).map_err(|e| ConfigError::FileRead {
                    path: p.to_string(),
                    source: e,
                })?;
                Self::from_toml(&content)?
            }
            _ => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if !overrides.zones.is_empty() {
            self.gateway.zones = overrides.zones;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let gateway = &self.gateway;

        if gateway.zones.is_empty() {
            return Err(ConfigError::Validation(
                "at least one zone must be configured".to_string(),
            ));
        }
        for zone in &gateway.zones {
            validate_domain_name(zone).map_err(ConfigError::Validation)?;
        }
        for zone in &gateway.fallthrough {
            validate_domain_name(zone).map_err(ConfigError::Validation)?;
        }
        validate_domain_name(&gateway.apex).map_err(ConfigError::Validation)?;
        validate_domain_name(&gateway.hostmaster).map_err(ConfigError::Validation)?;
        if let Some(ref secondary) = gateway.secondary {
            validate_domain_name(secondary).map_err(ConfigError::Validation)?;
        }

        if gateway.resources.is_empty() {
            return Err(ConfigError::Validation(
                "at least one resource kind must be enabled".to_string(),
            ));
        }
        gateway
            .resource_kinds()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if gateway.soa_ttl == 0 {
            return Err(ConfigError::Validation("soa_ttl must be positive".to_string()));
        }
        if gateway.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "lookup_timeout_ms must be positive".to_string(),
            ));
        }
        if self.registry.reload_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "reload_interval_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
