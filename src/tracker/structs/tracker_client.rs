use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use tokio::net::UdpSocket;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::types::SharedPendingRequests;

/// UDP client for the rendezvous tracker.
///
/// The socket slot is emptied on close; the listener task keeps its own handle until
/// it observes shutdown, after which the socket is released.
#[derive(Debug)]
pub struct TrackerClient {
    pub(crate) socket: RwLock<Option<Arc<UdpSocket>>>,
    pub(crate) record: RwLock<PeerRecord>,
    pub(crate) pending: SharedPendingRequests,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) announce_timeout: Duration,
    pub(crate) announce_retry_interval: Duration,
}
