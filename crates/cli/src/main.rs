use clap::Parser;
use ferrous_sinkhole_domain::{CliOverrides, Config};
use std::sync::Arc;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-sinkhole")]
#[command(version)]
#[command(about = "Ferrous Sinkhole - DNS relay that answers blocklisted names locally")]
struct Cli {
    /// Configuration file path (positional form)
    #[arg(value_name = "CONFIG", conflicts_with = "config")]
    config_path: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP port to listen on
    #[arg(short = 'p', long)]
    listen_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver IP address
    #[arg(long, value_name = "IP")]
    upstream: Option<String>,

    /// Upstream resolver port
    #[arg(long)]
    upstream_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Handle each datagram in its own task
    #[arg(long)]
    concurrent: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.or(cli.config_path);
    let source = config_path.clone().or_else(Config::get_config_path);

    let cli_overrides = CliOverrides {
        listen_port: cli.listen_port,
        bind_address: cli.bind,
        upstream_address: cli.upstream,
        upstream_port: cli.upstream_port,
        log_level: cli.log_level,
        concurrent: cli.concurrent,
    };

    let config = bootstrap::load_config(config_path.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Sinkhole v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_summary(&config, source.as_deref());

    let dns_services = di::DnsServices::new(&config)?;

    let dns_addr = config.server.socket_addr()?;

    let socket = match server::bind_udp_socket(dns_addr) {
        Ok(socket) => Arc::new(socket),
        Err(e) => {
            error!(bind_address = %dns_addr, error = %e, "Failed to bind DNS socket");
            if config.server.listen_port < 1024 {
                warn!("Ports below 1024 usually need root or CAP_NET_BIND_SERVICE");
            }
            return Err(e);
        }
    };

    tokio::select! {
        _ = server::serve_udp(socket, dns_services.handler_use_case, config.server.concurrent) => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
