use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info};
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use crate::config::structs::configuration::Configuration;
use crate::keepalive::structs::keepalive_loop::KeepaliveLoop;
use crate::listener::structs::response_listener::ResponseListener;
use crate::negotiator::structs::connect_negotiator::ConnectNegotiator;
use crate::peers::enums::peer_origin::PeerOrigin;
use crate::peers::structs::peer_book::PeerBook;
use crate::session::enums::session_error::SessionError;
use crate::session::enums::session_event::SessionEvent;
use crate::session::structs::session::Session;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;
use crate::tracker::structs::tracker_client::TrackerClient;
use crate::tracker::traits::tracker_sender::TrackerSender;
use crate::transport::traits::stream_transport::StreamTransport;

impl Session {
    /// Opens the tracker socket, announces and starts the background tasks.
    ///
    /// Returns once the tracker assigned our ShareID. Any failure on the way closes
    /// whatever was already started.
    #[tracing::instrument(skip(config), level = "debug")]
    pub async fn start(config: Arc<Configuration>) -> Result<(Session, mpsc::UnboundedReceiver<SessionEvent>), SessionError>
    {
        let stats = StatsAtomics::shared();
        let client = Arc::new(TrackerClient::open(&config, stats.clone()).await?);
        let peers = PeerBook::shared();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, _) = watch::channel(false);

        let listener = ResponseListener::new(
            client.socket_handle()?,
            client.tracker_address(),
            client.pending(),
            stats.clone(),
            peers.clone(),
            events_tx.clone(),
        );
        let listener_task = tokio::spawn(listener.run(shutdown_tx.subscribe()));

        let session = Session {
            config,
            client,
            stats,
            peers,
            events: events_tx,
            shutdown: shutdown_tx,
            tasks: Mutex::new(vec![listener_task]),
            closed: AtomicBool::new(false),
        };

        let share_id = match session.client.announce().await {
            Ok(share_id) => share_id,
            Err(error) => {
                error!("[SESSION] Announce failed: {error}");
                session.close().await;
                return Err(error.into());
            }
        };
        let _ = session.events.send(SessionEvent::Announced(share_id));

        session.spawn_keepalive();
        Ok((session, events_rx))
    }

    fn spawn_keepalive(&self)
    {
        let sender: Arc<dyn TrackerSender> = self.client.clone();
        let keepalive = KeepaliveLoop::new(
            sender,
            Duration::from_secs(self.config.tracker.keepalive_interval),
            self.stats.clone(),
        );
        let shutdown = self.shutdown.subscribe();
        let observer = self.shutdown.subscribe();
        let events = self.events.clone();

        let task = tokio::spawn(async move {
            if let Err(error) = keepalive.run(shutdown).await {
                if !*observer.borrow() {
                    let _ = events.send(SessionEvent::Fatal(format!("keepalive stopped: {error}")));
                }
            }
        });
        self.tasks.lock().push(task);
    }

    /// Resolves a remote ShareID through the tracker and remembers the answer.
    ///
    /// Only one resolution may run at a time; closing the session abandons it.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn resolve_peer(&self, target: ShareId) -> Result<ResolvedPeerAddress, SessionError>
    {
        match self.client.state() {
            PeerState::Active => {}
            PeerState::Closed => return Err(TrackerError::Closed.into()),
            state => return Err(TrackerError::NotAnnounced(state).into()),
        }

        let sender: Arc<dyn TrackerSender> = self.client.clone();
        let negotiator = ConnectNegotiator::from_config(
            sender,
            self.client.pending(),
            self.stats.clone(),
            &self.config.negotiator,
        );
        let address = negotiator.negotiate(target.clone(), self.shutdown.subscribe()).await?;
        self.peers.record(target, address.clone(), PeerOrigin::Resolved);
        Ok(address)
    }

    /// Resolves `target` and opens a stream to it.
    pub async fn connect<T: StreamTransport>(&self, target: ShareId, transport: &T) -> Result<T::Stream, SessionError>
    {
        let address = self.resolve_peer(target).await?;
        Ok(transport.open_stream(&address).await?)
    }

    pub fn share_id(&self) -> Option<ShareId>
    {
        self.client.share_id()
    }

    pub fn state(&self) -> PeerState
    {
        self.client.state()
    }

    pub fn local_address(&self) -> SocketAddr
    {
        self.client.local_address()
    }

    pub fn tracker_address(&self) -> SocketAddr
    {
        self.client.tracker_address()
    }

    pub fn stats(&self) -> Stats
    {
        self.stats.get_stats()
    }

    pub fn peers(&self) -> Arc<PeerBook>
    {
        self.peers.clone()
    }

    pub fn config(&self) -> Arc<Configuration>
    {
        self.config.clone()
    }

    /// Receiver that turns true once the session is closing.
    pub fn subscribe_shutdown(&self) -> watch::Receiver<bool>
    {
        self.shutdown.subscribe()
    }

    pub fn is_closed(&self) -> bool
    {
        self.closed.load(Ordering::SeqCst)
    }

    /// Stops every background task and releases the socket. Safe to call more than once.
    pub async fn close(&self)
    {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        info!("[SESSION] Closing");
        self.shutdown.send_replace(true);
        self.client.close();

        let tasks: Vec<_> = std::mem::take(&mut *self.tasks.lock());
        for task in tasks {
            if let Err(error) = task.await {
                debug!("[SESSION] Background task ended abnormally: {error}");
            }
        }
        info!("[SESSION] Closed");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.shutdown.send_replace(true);
            self.client.close();
        }
    }
}
