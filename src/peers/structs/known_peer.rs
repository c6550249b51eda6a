use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::peers::enums::peer_origin::PeerOrigin;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KnownPeer {
    pub share_id: ShareId,
    pub address: ResolvedPeerAddress,
    pub origin: PeerOrigin,
    pub last_seen: DateTime<Utc>,
}
