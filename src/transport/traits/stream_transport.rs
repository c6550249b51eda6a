use std::net::SocketAddr;
use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{mpsc, watch};
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::transport::enums::transport_error::TransportError;

#[async_trait]
pub trait StreamTransport: Send + Sync {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    /// Opens a stream to an address the tracker resolved.
    async fn open_stream(&self, address: &ResolvedPeerAddress) -> Result<Self::Stream, TransportError>;

    /// Accepts streams and hands each one to `handler` until shutdown or until the
    /// handler side is dropped.
    async fn on_incoming_stream(
        &self,
        handler: mpsc::Sender<(Self::Stream, SocketAddr)>,
        shutdown: watch::Receiver<bool>,
    ) -> Result<(), TransportError>;
}
