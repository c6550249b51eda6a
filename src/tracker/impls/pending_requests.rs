use std::sync::Arc;
use log::debug;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use crate::tracker::enums::request_kind::RequestKind;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::pending_requests::PendingRequests;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;
use crate::tracker::types::{AnnounceReceiver, PushReceiver, SharedPendingRequests};

impl PendingRequests {
    pub fn new() -> PendingRequests {
        PendingRequests {
            announce: None,
            announce_problem: None,
            push: None,
        }
    }

    pub fn shared() -> SharedPendingRequests {
        Arc::new(Mutex::new(PendingRequests::new()))
    }

    /// Claims the announce slot. Fails while another announce is still waiting.
    pub fn register_announce(&mut self) -> Result<AnnounceReceiver, TrackerError> {
        if self.announce.as_ref().is_some_and(|waiter| !waiter.is_closed()) {
            return Err(TrackerError::RequestInFlight(RequestKind::Announce));
        }
        let (tx, rx) = oneshot::channel();
        self.announce = Some(tx);
        self.announce_problem = None;
        Ok(rx)
    }

    /// Hands the assigned ShareID to the announce waiter. Returns false when nobody was waiting anymore.
    pub fn complete_announce(&mut self, share_id: ShareId) -> bool {
        match self.announce.take() {
            Some(waiter) => waiter.send(share_id).is_ok(),
            None => false,
        }
    }

    /// Remembers why an acknowledgement could not be used. The waiter stays registered.
    pub fn note_announce_problem(&mut self, reason: String) -> bool {
        if self.announce.is_none() {
            return false;
        }
        self.announce_problem = Some(reason);
        true
    }

    pub fn take_announce_problem(&mut self) -> Option<String> {
        self.announce_problem.take()
    }

    pub fn cancel_announce(&mut self) {
        self.announce_problem = None;
        if self.announce.take().is_some() {
            debug!("[PENDING] Announce waiter cancelled");
        }
    }

    /// Claims the push slot for `target`. Fails while another push is still waiting.
    pub fn register_push(&mut self, target: ShareId) -> Result<PushReceiver, TrackerError> {
        if self.push.as_ref().is_some_and(|(_, waiter)| !waiter.is_closed()) {
            return Err(TrackerError::RequestInFlight(RequestKind::Push));
        }
        let (tx, rx) = oneshot::channel();
        self.push = Some((target, tx));
        Ok(rx)
    }

    /// Hands a resolved address to the push waiter.
    ///
    /// When the tracker names the peer it resolved and that is not the pending target,
    /// the answer belongs to an older push and the slot is left untouched.
    pub fn complete_push(&mut self, answered_for: Option<&ShareId>, address: ResolvedPeerAddress) -> bool {
        let matches = match (&self.push, answered_for) {
            (Some((target, _)), Some(answered)) => target == answered,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if !matches {
            return false;
        }
        match self.push.take() {
            Some((_, waiter)) => waiter.send(address).is_ok(),
            None => false,
        }
    }

    pub fn cancel_push(&mut self) {
        if self.push.take().is_some() {
            debug!("[PENDING] Push waiter cancelled");
        }
    }

    pub fn pending_push_target(&self) -> Option<ShareId> {
        self.push.as_ref().map(|(target, _)| target.clone())
    }

    pub fn has_pending(&self, kind: RequestKind) -> bool {
        match kind {
            RequestKind::Announce => self.announce.is_some(),
            RequestKind::Push => self.push.is_some(),
        }
    }

    pub fn cancel_all(&mut self) {
        self.cancel_announce();
        self.cancel_push();
    }
}
