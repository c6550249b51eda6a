use crate::tracker::structs::share_id::ShareId;
use crate::tracker::types::{AnnounceWaiter, PushWaiter};

/// Outstanding requests waiting for a tracker response.
///
/// One slot per request kind. A slot is emptied the moment a response is handed over,
/// so duplicates and late answers find nothing to complete.
#[derive(Debug, Default)]
pub struct PendingRequests {
    pub announce: Option<AnnounceWaiter>,
    /// Last unusable acknowledgement seen while the announce was waiting.
    pub announce_problem: Option<String>,
    pub push: Option<(ShareId, PushWaiter)>,
}
