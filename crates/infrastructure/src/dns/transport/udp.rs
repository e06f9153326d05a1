//! UDP transport to the upstream resolver (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back, on a fresh ephemeral socket per
//! query. No retries and no TCP fallback: a truncated reply is relayed as-is.

use async_trait::async_trait;
use ferrous_sinkhole_application::ports::UpstreamForwarder;
use ferrous_sinkhole_domain::{DomainError, MAX_MESSAGE_LEN};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn unavailable(&self, reason: String) -> DomainError {
        DomainError::UpstreamUnavailable {
            server: self.server_addr.to_string(),
            reason,
        }
    }

    fn timed_out(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

#[async_trait]
impl UpstreamForwarder for UdpTransport {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.unavailable(format!("failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send_to(query, self.server_addr))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.unavailable(format!("send failed: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_MESSAGE_LEN];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timed_out())?
                .map_err(|e| self.unavailable(format!("receive failed: {}", e)))?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn upstream_name(&self) -> String {
        self.server_addr.to_string()
    }
}
