use std::sync::Arc;
use chrono::Utc;
use log::debug;
use crate::peers::enums::peer_origin::PeerOrigin;
use crate::peers::structs::known_peer::KnownPeer;
use crate::peers::structs::peer_book::PeerBook;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;

impl PeerBook {
    pub fn new() -> PeerBook
    {
        PeerBook::default()
    }

    pub fn shared() -> Arc<PeerBook>
    {
        Arc::new(PeerBook::new())
    }

    /// Inserts or refreshes a peer. A known peer keeps its entry, with the new address,
    /// origin and last-seen time. Returns true for a peer seen for the first time.
    pub fn record(&self, share_id: ShareId, address: ResolvedPeerAddress, origin: PeerOrigin) -> bool
    {
        let mut peers = self.peers.write();
        let peer = KnownPeer {
            share_id: share_id.clone(),
            address,
            origin,
            last_seen: Utc::now(),
        };
        debug!("[PEERS] {} at {} ({:?})", peer.share_id, peer.address, peer.origin);
        peers.insert(share_id, peer).is_none()
    }

    pub fn find_by_share_id(&self, share_id: &ShareId) -> Option<KnownPeer>
    {
        self.peers.read().get(share_id).cloned()
    }

    pub fn find_by_address(&self, address: &ResolvedPeerAddress) -> Option<KnownPeer>
    {
        self.peers.read().values().find(|peer| &peer.address == address).cloned()
    }

    /// Every known peer, most recently seen first.
    pub fn list(&self) -> Vec<KnownPeer>
    {
        let mut peers: Vec<KnownPeer> = self.peers.read().values().cloned().collect();
        peers.sort_by(|a, b| b.last_seen.cmp(&a.last_seen).then_with(|| a.share_id.cmp(&b.share_id)));
        peers
    }

    pub fn len(&self) -> usize
    {
        self.peers.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.peers.read().is_empty()
    }
}
