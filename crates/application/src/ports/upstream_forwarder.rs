use async_trait::async_trait;
use ferrous_sinkhole_domain::DomainError;

/// Sends a query to the upstream resolver and returns its single reply.
///
/// Implementations make exactly one attempt, bounded by their own timeout,
/// and return the reply bytes untouched.
#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Endpoint name for log lines.
    fn upstream_name(&self) -> String;
}
