use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use crate::transport::enums::transport_error::TransportError;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads a `/ip4/<ip>/tcp/<port>` or `/ip6/<ip>/tcp/<port>` endpoint.
///
/// Any trailing components (such as `/p2p/<id>`) are ignored.
pub fn parse_multiaddr(address: &str) -> Result<SocketAddr, TransportError>
{
    let invalid = || TransportError::InvalidAddress(address.to_string());
    let mut parts = address.strip_prefix('/').ok_or_else(invalid)?.split('/');

    let ip: IpAddr = match (parts.next(), parts.next()) {
        (Some("ip4"), Some(ip)) | (Some("ip6"), Some(ip)) => ip.parse().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    let port: u16 = match (parts.next(), parts.next()) {
        (Some("tcp"), Some(port)) => port.parse().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    Ok(SocketAddr::new(ip, port))
}
