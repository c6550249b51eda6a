use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use crate::tracker::structs::pending_requests::PendingRequests;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;

pub type AnnounceWaiter = oneshot::Sender<ShareId>;
pub type AnnounceReceiver = oneshot::Receiver<ShareId>;
pub type PushWaiter = oneshot::Sender<ResolvedPeerAddress>;
pub type PushReceiver = oneshot::Receiver<ResolvedPeerAddress>;
pub type SharedPendingRequests = Arc<Mutex<PendingRequests>>;
