use ferrous_sinkhole_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs the effective configuration, one line per blocklist entry.
pub fn log_config_summary(config: &Config, source: Option<&str>) {
    info!(
        source = source.unwrap_or("built-in defaults"),
        "Configuration loaded"
    );
    info!(
        upstream = %format!("{}:{}", config.upstream.address, config.upstream.port),
        timeout_ms = config.upstream.timeout_ms,
        "Upstream resolver"
    );
    info!(
        response = %config.blocking.response,
        fake_ip = %config.blocking.fake_ip,
        ttl = config.blocking.ttl,
        "Blocked response"
    );
    info!(
        bind = %config.server.bind_address,
        listen_port = config.server.listen_port,
        concurrent = config.server.concurrent,
        "Listener"
    );
    info!(entries = config.blocking.blacklist.len(), "Blocklist");
    for entry in &config.blocking.blacklist {
        info!(domain = %entry.trim(), "  blocked");
    }
}
