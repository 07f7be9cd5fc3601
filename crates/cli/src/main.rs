//! # Gateway DNS Server
//!
//! Authoritative DNS for names published by routes, ingresses, services and
//! DNS endpoint records.

use clap::Parser;
use gateway_dns_domain::CliOverrides;
use gateway_dns_infrastructure::dns::{GatewayRequestHandler, NoDownstream};
use gateway_dns_jobs::{JobRunner, RegistrySyncJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "gateway-dns")]
#[command(version)]
#[command(about = "Authoritative DNS server backed by gateway and service registries")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Authoritative zone, repeatable. Replaces the configured zones.
    #[arg(short = 'z', long = "zone")]
    zones: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        zones: cli.zones,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config(&config, cli.config.as_deref());

    let services = di::GatewayServices::build(&config)?;

    match services.reload.execute().await {
        Ok(keys) => info!(keys, "Registries ready"),
        Err(e) => warn!(
            error = %e,
            "Initial registry load failed, in-zone queries fail until a reload succeeds"
        ),
    }

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_registry_sync(
            RegistrySyncJob::new(
                Arc::clone(&services.reload),
                config.registry.reload_interval_secs,
            )
            .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let handler = GatewayRequestHandler::new(Arc::clone(&services.handle_query), NoDownstream);

    let result = server::start_dns_server(&config.server, handler).await;
    shutdown.cancel();
    result
}
