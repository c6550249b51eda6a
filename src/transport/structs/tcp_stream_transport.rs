use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TcpStreamTransport {
    pub(crate) listen_address: SocketAddr,
    pub(crate) connect_timeout: Duration,
}
