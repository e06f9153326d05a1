use ferrous_sinkhole_application::use_cases::HandleDnsQueryUseCase;
use ferrous_sinkhole_domain::MAX_MESSAGE_LEN;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

pub fn bind_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

/// Receive loop. Serialized unless `concurrent`, in which case each datagram
/// gets its own task.
pub async fn serve_udp(
    socket: Arc<UdpSocket>,
    handler: Arc<HandleDnsQueryUseCase>,
    concurrent: bool,
) {
    if let Ok(addr) = socket.local_addr() {
        info!(bind_address = %addr, concurrent, "DNS sinkhole ready");
    }

    // One spare byte: a datagram that fills it is over the limit.
    let mut recv_buf = [0u8; MAX_MESSAGE_LEN + 1];

    loop {
        let (len, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        if len > MAX_MESSAGE_LEN {
            warn!(
                client = %from,
                limit = MAX_MESSAGE_LEN,
                "Datagram exceeds message limit, dropped"
            );
            continue;
        }

        debug!(client = %from, bytes = len, "Received query");

        if concurrent {
            let socket = socket.clone();
            let handler = handler.clone();
            let packet: Arc<[u8]> = Arc::from(&recv_buf[..len]);
            tokio::spawn(async move {
                handle_datagram(&socket, &handler, &packet, from).await;
            });
        } else {
            handle_datagram(&socket, &handler, &recv_buf[..len], from).await;
        }
    }
}

async fn handle_datagram(
    socket: &UdpSocket,
    handler: &HandleDnsQueryUseCase,
    packet: &[u8],
    from: SocketAddr,
) {
    match handler.execute(packet).await {
        Ok(outcome) => {
            if let Err(e) = socket.send_to(outcome.response(), from).await {
                warn!(client = %from, error = %e, "Failed to send reply");
            }
        }
        Err(e) => {
            warn!(client = %from, error = %e, "No reply sent");
        }
    }
}
