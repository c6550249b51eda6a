use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;

/// Notifications a running session hands to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The tracker assigned our ShareID.
    Announced(ShareId),
    /// The tracker reported that a remote peer pushed for our ShareID.
    IncomingPeer {
        share_id: ShareId,
        address: ResolvedPeerAddress,
    },
    /// A background task stopped for good. The session is no longer usable.
    Fatal(String),
}
