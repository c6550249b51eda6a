use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::RwLock;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::time::MissedTickBehavior;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::enums::request_kind::RequestKind;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::pending_requests::PendingRequests;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::share_id::ShareId;
use crate::tracker::structs::tracker_client::TrackerClient;
use crate::tracker::structs::tracker_message::TrackerMessage;
use crate::tracker::tracker::MIN_TICK;
use crate::tracker::traits::tracker_sender::TrackerSender;
use crate::tracker::types::{AnnounceReceiver, SharedPendingRequests};

impl TrackerClient {
    /// Resolves the tracker address and binds the local UDP endpoint.
    #[tracing::instrument(skip(config, stats), level = "debug")]
    pub async fn open(config: &Configuration, stats: Arc<StatsAtomics>) -> Result<TrackerClient, TrackerError>
    {
        let tracker_address = TrackerClient::resolve_address(&config.tracker.address).await?;
        let bind_address = TrackerClient::bind_address_for(&config.peer, tracker_address)?;
        let socket = TrackerClient::bind_socket(bind_address, &config.peer)?;
        let local_address = socket.local_addr().map_err(|source| TrackerError::Bind {
            address: bind_address.to_string(),
            source,
        })?;

        info!("[TRACKER] Bound {local_address}, tracker at {tracker_address}");

        Ok(TrackerClient {
            socket: RwLock::new(Some(Arc::new(socket))),
            record: RwLock::new(PeerRecord::new(tracker_address, local_address)),
            pending: PendingRequests::shared(),
            stats,
            announce_timeout: Duration::from_secs(config.tracker.announce_timeout),
            announce_retry_interval: Duration::from_secs(config.tracker.announce_retry_interval).max(MIN_TICK),
        })
    }

    pub async fn resolve_address(address: &str) -> Result<SocketAddr, TrackerError>
    {
        let resolution_error = |reason: String| TrackerError::AddressResolution {
            address: address.to_string(),
            reason,
        };

        let mut candidates = tokio::net::lookup_host(address)
            .await
            .map_err(|e| resolution_error(e.to_string()))?;
        candidates
            .next()
            .ok_or_else(|| resolution_error(String::from("no addresses found")))
    }

    /// Local bind address for the configured peer settings.
    ///
    /// An unspecified bind address follows the tracker's address family, so an IPv6
    /// tracker gets an IPv6 socket even with the default `0.0.0.0`.
    pub fn bind_address_for(peer: &PeerConfig, tracker_address: SocketAddr) -> Result<SocketAddr, TrackerError>
    {
        let configured: IpAddr = peer.bind_address.parse().map_err(|_| TrackerError::Bind {
            address: peer.bind_address.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "bind address is not an IP address"),
        })?;

        let ip = match (configured.is_unspecified(), tracker_address) {
            (true, SocketAddr::V4(_)) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            (true, SocketAddr::V6(_)) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
            (false, _) => configured,
        };
        Ok(SocketAddr::new(ip, peer.port))
    }

    fn bind_socket(bind_address: SocketAddr, peer: &PeerConfig) -> Result<UdpSocket, TrackerError>
    {
        let bind_error = |source: std::io::Error| TrackerError::Bind {
            address: bind_address.to_string(),
            source,
        };

        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP)).map_err(bind_error)?;

        if let Some(size) = peer.recv_buffer_size {
            socket.set_recv_buffer_size(size).map_err(bind_error)?;
        }
        if let Some(size) = peer.send_buffer_size {
            socket.set_send_buffer_size(size).map_err(bind_error)?;
        }

        socket.bind(&bind_address.into()).map_err(bind_error)?;
        socket.set_nonblocking(true).map_err(bind_error)?;

        let std_socket: std::net::UdpSocket = socket.into();
        UdpSocket::from_std(std_socket).map_err(bind_error)
    }

    /// Registers with the tracker and returns the assigned ShareID.
    ///
    /// The announce is re-sent every retry interval until the tracker acknowledges it or
    /// the announce timeout elapses. Only one announce may be in flight.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn announce(&self) -> Result<ShareId, TrackerError>
    {
        {
            let mut record = self.record.write();
            match record.state {
                PeerState::Unregistered => { record.state = PeerState::Announcing; }
                PeerState::Announcing => { return Err(TrackerError::RequestInFlight(RequestKind::Announce)); }
                PeerState::Active => { return Err(TrackerError::AlreadyAnnounced); }
                PeerState::Closed => { return Err(TrackerError::Closed); }
            }
        }

        let registered = self.pending.lock().register_announce();
        let result = match registered {
            Ok(receiver) => self.await_announce(receiver).await,
            Err(error) => Err(error),
        };

        let mut record = self.record.write();
        match result {
            Ok(share_id) => {
                if record.state == PeerState::Closed {
                    return Err(TrackerError::Closed);
                }
                info!("[TRACKER] Announced with share id {share_id}");
                record.share_id = Some(share_id.clone());
                record.state = PeerState::Active;
                Ok(share_id)
            }
            Err(error) => {
                self.pending.lock().cancel_announce();
                if record.state != PeerState::Closed {
                    record.state = PeerState::Unregistered;
                }
                Err(error)
            }
        }
    }

    async fn await_announce(&self, mut receiver: AnnounceReceiver) -> Result<ShareId, TrackerError>
    {
        let deadline = tokio::time::sleep(self.announce_timeout);
        tokio::pin!(deadline);

        let mut resend = tokio::time::interval(self.announce_retry_interval);
        resend.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                outcome = &mut receiver => {
                    return outcome.map_err(|_| TrackerError::Closed);
                }
                _ = &mut deadline => {
                    if let Some(problem) = self.pending.lock().take_announce_problem() {
                        warn!("[TRACKER] Only unusable announce acknowledgements within {:?}", self.announce_timeout);
                        return Err(TrackerError::Protocol(problem));
                    }
                    warn!("[TRACKER] No announce acknowledgement within {:?}", self.announce_timeout);
                    return Err(TrackerError::Timeout(RequestKind::Announce));
                }
                _ = resend.tick() => {
                    match self.send_message(&TrackerMessage::announce()).await {
                        Ok(()) => { self.stats.update_stats(StatsEvent::AnnouncesSent, 1); }
                        Err(error) if error.is_fatal() => { return Err(error); }
                        Err(error) => { warn!("[TRACKER] Announce send failed, retrying: {error}"); }
                    }
                }
            }
        }
    }

    /// Encodes and sends one message to the tracker.
    pub async fn send_message(&self, message: &TrackerMessage) -> Result<(), TrackerError>
    {
        let socket = self.socket_handle()?;
        let payload = message.encode()?;
        let tracker_address = self.record.read().tracker_address;

        socket.send_to(&payload, tracker_address).await.map_err(TrackerError::Send)?;
        debug!("[TRACKER] Sent {:?} ({} bytes) to {tracker_address}", message.action, payload.len());
        Ok(())
    }

    /// Shared handle on the socket, for the listener.
    pub fn socket_handle(&self) -> Result<Arc<UdpSocket>, TrackerError>
    {
        self.socket.read().clone().ok_or(TrackerError::Closed)
    }

    /// Releases the socket. Later sends fail with `TrackerError::Closed`.
    /// Returns false when the client was already closed.
    pub fn close(&self) -> bool
    {
        let released = self.socket.write().take().is_some();
        self.record.write().state = PeerState::Closed;
        self.pending.lock().cancel_all();
        if released {
            info!("[TRACKER] Client closed");
        }
        released
    }

    pub fn record(&self) -> PeerRecord
    {
        self.record.read().clone()
    }

    pub fn state(&self) -> PeerState
    {
        self.record.read().state
    }

    pub fn share_id(&self) -> Option<ShareId>
    {
        self.record.read().share_id.clone()
    }

    pub fn tracker_address(&self) -> SocketAddr
    {
        self.record.read().tracker_address
    }

    pub fn local_address(&self) -> SocketAddr
    {
        self.record.read().local_address
    }

    pub fn pending(&self) -> SharedPendingRequests
    {
        self.pending.clone()
    }
}

#[async_trait]
impl TrackerSender for TrackerClient {
    async fn send_pulse(&self, override_flag: bool) -> Result<(), TrackerError>
    {
        let share_id = {
            let record = self.record.read();
            match (&record.state, &record.share_id) {
                (PeerState::Closed, _) => return Err(TrackerError::Closed),
                (PeerState::Active, Some(share_id)) => share_id.clone(),
                (state, _) => return Err(TrackerError::NotAnnounced(*state)),
            }
        };
        self.send_message(&TrackerMessage::pulse(&share_id, override_flag)).await
    }

    async fn send_push(&self, target: &ShareId) -> Result<(), TrackerError>
    {
        self.send_message(&TrackerMessage::push(target)).await
    }
}
