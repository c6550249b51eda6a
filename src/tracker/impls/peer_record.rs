use std::net::SocketAddr;
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::structs::peer_record::PeerRecord;

impl PeerRecord {
    pub fn new(tracker_address: SocketAddr, local_address: SocketAddr) -> PeerRecord {
        PeerRecord {
            share_id: None,
            tracker_address,
            local_address,
            state: PeerState::Unregistered,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == PeerState::Active && self.share_id.is_some()
    }
}
