use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, info, warn};
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, watch};
use crate::listener::enums::dispatch_outcome::DispatchOutcome;
use crate::listener::structs::response_listener::ResponseListener;
use crate::peers::enums::peer_origin::PeerOrigin;
use crate::peers::structs::peer_book::PeerBook;
use crate::session::enums::session_event::SessionEvent;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::request_kind::RequestKind;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::tracker_action::TrackerAction;
use crate::tracker::structs::tracker_message::TrackerMessage;
use crate::tracker::tracker::MAX_PACKET_SIZE;
use crate::tracker::types::SharedPendingRequests;

impl ResponseListener {
    pub fn new(
        socket: Arc<UdpSocket>,
        tracker_address: SocketAddr,
        pending: SharedPendingRequests,
        stats: Arc<StatsAtomics>,
        peers: Arc<PeerBook>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> ResponseListener
    {
        ResponseListener {
            socket,
            tracker_address,
            pending,
            stats,
            peers,
            events,
        }
    }

    /// Reads datagrams one at a time until shutdown is signalled.
    ///
    /// Receive errors are logged and the loop keeps going; only shutdown ends it. The
    /// socket handle is dropped on return.
    #[tracing::instrument(skip(self, shutdown), level = "debug")]
    pub async fn run(self, mut shutdown: watch::Receiver<bool>)
    {
        info!("[LISTENER] Listening for tracker responses from {}", self.tracker_address);
        let mut buffer = vec![0u8; MAX_PACKET_SIZE];

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
                received = self.socket.recv_from(&mut buffer) => {
                    match received {
                        Ok((size, from)) => { self.handle_datagram(&buffer[..size], from); }
                        Err(error) => { warn!("[LISTENER] Receive failed: {error}"); }
                    }
                }
            }
        }

        info!("[LISTENER] Stopped");
    }

    /// Counts the datagram and dispatches it if it came from the tracker.
    pub fn handle_datagram(&self, payload: &[u8], from: SocketAddr) -> DispatchOutcome
    {
        self.stats.update_stats(StatsEvent::DatagramsReceived, 1);

        if from != self.tracker_address {
            debug!("[LISTENER] Dropping {} bytes from {from}, not the tracker", payload.len());
            self.stats.update_stats(StatsEvent::UnsolicitedDropped, 1);
            return DispatchOutcome::Unsolicited;
        }

        self.dispatch(payload)
    }

    pub fn dispatch(&self, payload: &[u8]) -> DispatchOutcome
    {
        let message = match TrackerMessage::decode(payload) {
            Ok(message) => message,
            Err(error) => {
                warn!("[LISTENER] Dropping malformed datagram ({} bytes): {error}", payload.len());
                self.stats.update_stats(StatsEvent::MalformedDropped, 1);
                return DispatchOutcome::Malformed;
            }
        };

        match message.action {
            TrackerAction::AnnounceReceived => self.on_announce_received(&message),
            TrackerAction::PushReceived => self.on_push_received(&message),
            TrackerAction::Income => self.on_income(&message),
            TrackerAction::Announce | TrackerAction::Pulse | TrackerAction::Push | TrackerAction::Unknown => {
                debug!("[LISTENER] Dropping unsolicited {:?} message", message.action);
                self.stats.update_stats(StatsEvent::UnsolicitedDropped, 1);
                DispatchOutcome::Unsolicited
            }
        }
    }

    fn on_announce_received(&self, message: &TrackerMessage) -> DispatchOutcome
    {
        let share_id = match message.announced_share_id() {
            Ok(share_id) => share_id,
            Err(error) => {
                warn!("[LISTENER] Bad announce acknowledgement, announce stays pending: {error}");
                let reason = match error {
                    TrackerError::Protocol(reason) => reason,
                    other => other.to_string(),
                };
                self.pending.lock().note_announce_problem(reason);
                return self.protocol_error();
            }
        };

        if self.pending.lock().complete_announce(share_id) {
            DispatchOutcome::Completed(RequestKind::Announce)
        } else {
            self.drop_late(RequestKind::Announce)
        }
    }

    fn on_push_received(&self, message: &TrackerMessage) -> DispatchOutcome
    {
        let address = match message.resolved_address() {
            Ok(address) => address,
            Err(error) => {
                warn!("[LISTENER] Push answer without a usable address, push stays pending: {error}");
                return self.protocol_error();
            }
        };

        let answered_for = message.peer_share_id();
        if self.pending.lock().complete_push(answered_for.as_ref(), address) {
            DispatchOutcome::Completed(RequestKind::Push)
        } else {
            self.drop_late(RequestKind::Push)
        }
    }

    fn on_income(&self, message: &TrackerMessage) -> DispatchOutcome
    {
        self.stats.update_stats(StatsEvent::IncomingNotices, 1);

        let (share_id, address) = match (message.peer_share_id(), message.resolved_address()) {
            (Some(share_id), Ok(address)) => (share_id, address),
            (None, _) => {
                warn!("[LISTENER] Income notice does not name the peer");
                return self.protocol_error();
            }
            (_, Err(error)) => {
                warn!("[LISTENER] Income notice without a usable address: {error}");
                return self.protocol_error();
            }
        };

        info!("[LISTENER] Peer {share_id} at {address} is looking for us");
        self.peers.record(share_id.clone(), address.clone(), PeerOrigin::Incoming);
        if self.events.send(SessionEvent::IncomingPeer { share_id, address }).is_err() {
            debug!("[LISTENER] Nobody is listening for session events");
        }
        DispatchOutcome::Notified
    }

    fn protocol_error(&self) -> DispatchOutcome
    {
        self.stats.update_stats(StatsEvent::ProtocolErrors, 1);
        DispatchOutcome::ProtocolError
    }

    fn drop_late(&self, kind: RequestKind) -> DispatchOutcome
    {
        debug!("[LISTENER] Dropping {kind} response, nobody is waiting for it");
        self.stats.update_stats(StatsEvent::LateResponsesDropped, 1);
        DispatchOutcome::Late
    }
}
