//! Listener enumerations.

/// What happened to one received datagram.
pub mod dispatch_outcome;
