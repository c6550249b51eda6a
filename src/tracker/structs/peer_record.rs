use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::structs::share_id::ShareId;

/// Local view of our registration with the tracker. Lives as long as the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerRecord {
    pub share_id: Option<ShareId>,
    pub tracker_address: SocketAddr,
    pub local_address: SocketAddr,
    pub state: PeerState,
}
