use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use crate::config::structs::configuration::Configuration;
use crate::peers::structs::peer_book::PeerBook;
use crate::session::enums::session_event::SessionEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::tracker_client::TrackerClient;

pub struct Session {
    pub(crate) config: Arc<Configuration>,
    pub(crate) client: Arc<TrackerClient>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) peers: Arc<PeerBook>,
    pub(crate) events: mpsc::UnboundedSender<SessionEvent>,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) tasks: Mutex<Vec<JoinHandle<()>>>,
    pub(crate) closed: AtomicBool,
}
