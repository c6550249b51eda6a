use std::net::SocketAddr;
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, watch};
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::transport::enums::transport_error::TransportError;
use crate::transport::structs::tcp_stream_transport::TcpStreamTransport;
use crate::transport::traits::stream_transport::StreamTransport;
use crate::transport::transport::{parse_multiaddr, DEFAULT_CONNECT_TIMEOUT};

impl TcpStreamTransport {
    pub fn new(listen_address: SocketAddr) -> TcpStreamTransport
    {
        TcpStreamTransport {
            listen_address,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> TcpStreamTransport
    {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Turns a resolved address into a socket address, looking up host names.
    pub async fn resolve_endpoint(address: &ResolvedPeerAddress) -> Result<SocketAddr, TransportError>
    {
        let text = address.as_str();
        if text.starts_with('/') {
            return parse_multiaddr(text);
        }
        if let Ok(endpoint) = text.parse::<SocketAddr>() {
            return Ok(endpoint);
        }

        let mut candidates = tokio::net::lookup_host(text)
            .await
            .map_err(|_| TransportError::InvalidAddress(text.to_string()))?;
        candidates.next().ok_or_else(|| TransportError::InvalidAddress(text.to_string()))
    }

    pub async fn bind_listener(&self) -> Result<TcpListener, TransportError>
    {
        TcpListener::bind(self.listen_address).await.map_err(|source| TransportError::Bind {
            address: self.listen_address.to_string(),
            source,
        })
    }

    /// Accept loop over an already bound listener.
    pub async fn serve(
        listener: TcpListener,
        handler: mpsc::Sender<(TcpStream, SocketAddr)>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), TransportError>
    {
        if let Ok(local) = listener.local_addr() {
            info!("[TRANSPORT] Accepting peer streams on {local}");
        }

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, remote)) => {
                            debug!("[TRANSPORT] Incoming stream from {remote}");
                            if handler.send((stream, remote)).await.is_err() {
                                debug!("[TRANSPORT] Stream handler is gone, stop accepting");
                                break;
                            }
                        }
                        Err(error) => { warn!("[TRANSPORT] Accept failed: {error}"); }
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StreamTransport for TcpStreamTransport {
    type Stream = TcpStream;

    #[tracing::instrument(skip(self), level = "debug")]
    async fn open_stream(&self, address: &ResolvedPeerAddress) -> Result<TcpStream, TransportError>
    {
        let endpoint = TcpStreamTransport::resolve_endpoint(address).await?;
        match tokio::time::timeout(self.connect_timeout, TcpStream::connect(endpoint)).await {
            Ok(Ok(stream)) => {
                info!("[TRANSPORT] Connected to {endpoint}");
                Ok(stream)
            }
            Ok(Err(source)) => Err(TransportError::Connect { address: endpoint.to_string(), source }),
            Err(_) => Err(TransportError::ConnectTimeout(endpoint.to_string())),
        }
    }

    async fn on_incoming_stream(
        &self,
        handler: mpsc::Sender<(TcpStream, SocketAddr)>,
        shutdown: watch::Receiver<bool>,
    ) -> Result<(), TransportError>
    {
        let listener = self.bind_listener().await?;
        TcpStreamTransport::serve(listener, handler, shutdown).await
    }
}
