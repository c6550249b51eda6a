use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerOrigin {
    /// We pushed for its ShareID and the tracker answered.
    Resolved,
    /// The tracker reported that it pushed for ours.
    Incoming,
}
