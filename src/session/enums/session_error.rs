use thiserror::Error;
use crate::negotiator::enums::negotiation_error::NegotiationError;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::transport::enums::transport_error::TransportError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("tracker: {0}")]
    Tracker(#[from] TrackerError),

    #[error("{0}")]
    Negotiation(#[from] NegotiationError),

    #[error("transport: {0}")]
    Transport(#[from] TransportError),
}
