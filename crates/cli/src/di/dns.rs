use ferrous_sinkhole_application::ports::UpstreamForwarder;
use ferrous_sinkhole_application::use_cases::HandleDnsQueryUseCase;
use ferrous_sinkhole_domain::Config;
use ferrous_sinkhole_infrastructure::dns::UdpTransport;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let settings = Arc::new(config.relay_settings()?);

        let forwarder: Arc<dyn UpstreamForwarder> = Arc::new(UdpTransport::new(
            settings.upstream,
            settings.upstream_timeout,
        ));

        info!(
            upstream = %forwarder.upstream_name(),
            mode = %settings.mode,
            blocked_domains = settings.blocklist.len(),
            "DNS services initialized"
        );

        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(settings, forwarder));

        Ok(Self { handler_use_case })
    }
}
