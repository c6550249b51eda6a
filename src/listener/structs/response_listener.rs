use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use crate::peers::structs::peer_book::PeerBook;
use crate::session::enums::session_event::SessionEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::types::SharedPendingRequests;

#[derive(Debug)]
pub struct ResponseListener {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) tracker_address: SocketAddr,
    pub(crate) pending: SharedPendingRequests,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) peers: Arc<PeerBook>,
    pub(crate) events: mpsc::UnboundedSender<SessionEvent>,
}
