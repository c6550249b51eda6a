use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerState {
    Unregistered,
    Announcing,
    Active,
    Closed,
}
