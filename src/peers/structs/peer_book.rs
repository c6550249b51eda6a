use std::collections::HashMap;
use parking_lot::RwLock;
use crate::peers::structs::known_peer::KnownPeer;
use crate::tracker::structs::share_id::ShareId;

#[derive(Debug, Default)]
pub struct PeerBook {
    pub(crate) peers: RwLock<HashMap<ShareId, KnownPeer>>,
}
