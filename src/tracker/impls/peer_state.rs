use std::fmt;
use crate::tracker::enums::peer_state::PeerState;

impl fmt::Display for PeerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerState::Unregistered => write!(f, "unregistered"),
            PeerState::Announcing => write!(f, "announcing"),
            PeerState::Active => write!(f, "active"),
            PeerState::Closed => write!(f, "closed"),
        }
    }
}
