//! Response listener module.
//!
//! One task owns the receive direction of the tracker socket for the whole
//! session. Every datagram is checked for its source, decoded, and routed:
//!
//! - `announceReceived` completes the pending announce
//! - `pushReceived` completes the pending push when it answers the current target
//! - `income` is recorded in the peer book and reported as a session event
//! - anything else is dropped
//!
//! Malformed input is logged and counted, never fatal. A response nobody waits
//! for anymore is dropped rather than queued for a later request.

/// Dispatch outcome enumeration.
pub mod enums;

/// Implementation blocks for the listener.
pub mod impls;

/// Listener data structures.
pub mod structs;

/// Unit tests for datagram dispatch.
pub mod tests;
