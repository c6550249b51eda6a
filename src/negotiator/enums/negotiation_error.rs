use thiserror::Error;
use crate::negotiator::enums::abandon_reason::AbandonReason;
use crate::tracker::structs::share_id::ShareId;

#[derive(Error, Debug)]
pub enum NegotiationError {
    #[error("peer not resolved: {target} after {attempts} push attempt(s), {reason}")]
    PeerNotResolved {
        target: ShareId,
        attempts: u32,
        reason: AbandonReason,
    },

    #[error("another push is already in flight")]
    RequestInFlight,

    #[error("this negotiator was already used")]
    AlreadyStarted,
}
