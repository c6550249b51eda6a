use crate::tracker::enums::request_kind::RequestKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handed to the waiter of a pending request.
    Completed(RequestKind),
    /// A valid response nobody is waiting for, or one answering an older push.
    Late,
    /// Not a decodable tracker message.
    Malformed,
    /// Wrong source or an action the tracker never sends us.
    Unsolicited,
    /// Decoded, but missing the fields its action needs.
    ProtocolError,
    /// An `income` notice was recorded and forwarded.
    Notified,
}
