use crate::blocklist::Blocklist;
use crate::response_mode::ResponseMode;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runtime snapshot built once from [`crate::Config`] and shared read-only
/// by every request.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub upstream: SocketAddr,
    pub upstream_timeout: Duration,
    pub mode: ResponseMode,
    /// TTL of synthetic A records.
    pub ttl: u32,
    pub blocklist: Arc<Blocklist>,
}
