use crate::tracker::enums::tracker_error::TrackerError;

impl TrackerError {
    /// Whether this error ends the session.
    ///
    /// Address resolution and bind failures stop the session before it starts, a
    /// closed client or a lost registration stop the background loops. Everything else
    /// (a single failed send, a malformed answer, a timed out push) is retried or
    /// reported to the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TrackerError::AddressResolution { .. }
                | TrackerError::Bind { .. }
                | TrackerError::Closed
                | TrackerError::NotAnnounced(_)
        )
    }
}
