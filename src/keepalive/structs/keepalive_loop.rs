use std::sync::Arc;
use std::time::Duration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::traits::tracker_sender::TrackerSender;

pub struct KeepaliveLoop {
    pub(crate) sender: Arc<dyn TrackerSender>,
    pub(crate) interval: Duration,
    pub(crate) stats: Arc<StatsAtomics>,
}
