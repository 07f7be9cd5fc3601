use gateway_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Summary of the effective configuration, once logging is up.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        zones = ?config.gateway.zones,
        resources = ?config.gateway.resources,
        fallthrough = ?config.gateway.fallthrough,
        "Configuration loaded"
    );
}
