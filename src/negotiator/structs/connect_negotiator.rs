use std::sync::atomic::AtomicU32;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use crate::negotiator::enums::negotiator_state::NegotiatorState;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::traits::tracker_sender::TrackerSender;
use crate::tracker::types::SharedPendingRequests;

pub struct ConnectNegotiator {
    pub(crate) sender: Arc<dyn TrackerSender>,
    pub(crate) pending: SharedPendingRequests,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) retry_interval: Duration,
    pub(crate) budget: Duration,
    pub(crate) max_attempts: Option<u32>,
    pub(crate) state: RwLock<NegotiatorState>,
    pub(crate) attempts: AtomicU32,
}
