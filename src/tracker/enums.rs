//! Tracker enumerations.

/// Wire action carried in every tracker message.
pub mod tracker_action;

/// Errors raised by the tracker client.
pub mod tracker_error;

/// Lifecycle state of the local peer record.
pub mod peer_state;

/// Kind of request tracked in the pending table.
pub mod request_kind;
