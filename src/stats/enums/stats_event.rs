use serde::{Deserialize, Serialize};

/// Enumeration of all trackable protocol events.
///
/// Used with `StatsAtomics::update_stats()` to move the matching counter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Started,
    DatagramsReceived,
    MalformedDropped,
    UnsolicitedDropped,
    LateResponsesDropped,
    AnnouncesSent,
    PulsesSent,
    PulseFailures,
    PushesSent,
    PushesResolved,
    PushesAbandoned,
    IncomingNotices,
    ProtocolErrors,
}
