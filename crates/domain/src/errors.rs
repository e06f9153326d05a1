use crate::wire::WireError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Malformed DNS query: {0}")]
    MalformedQuery(WireError),

    #[error("Failed to build blocked response: {0}")]
    EncodeFailed(WireError),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Upstream {server} unavailable: {reason}")]
    UpstreamUnavailable { server: String, reason: String },
}

impl DomainError {
    /// True for failures of the single forwarding attempt to the upstream.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::TransportTimeout { .. } | Self::UpstreamUnavailable { .. }
        )
    }
}
