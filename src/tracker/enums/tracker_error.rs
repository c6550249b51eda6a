use thiserror::Error;
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::enums::request_kind::RequestKind;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("could not resolve tracker address '{address}': {reason}")]
    AddressResolution { address: String, reason: String },

    #[error("could not bind local UDP endpoint {address}: {source}")]
    Bind { address: String, source: std::io::Error },

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("{0} request timed out")]
    Timeout(RequestKind),

    #[error("a {0} request is already in flight")]
    RequestInFlight(RequestKind),

    #[error("already announced, share id is assigned once per session")]
    AlreadyAnnounced,

    #[error("not announced (state: {0})")]
    NotAnnounced(PeerState),

    #[error("tracker client is closed")]
    Closed,

    #[error("could not encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("send failed: {0}")]
    Send(std::io::Error),
}
