//! Tracker client module.
//!
//! This module implements the client side of the rendezvous protocol spoken with
//! the tracker over UDP.
//!
//! # Message Types
//!
//! - **announce**: register with the tracker, answered by `announceReceived`
//!   carrying our ShareID
//! - **pulse**: keepalive refreshing the tracker's view of our endpoint
//! - **push**: ask the tracker to resolve another peer's ShareID, answered by
//!   `pushReceived` once that peer is reachable
//! - **income**: notice from the tracker that somebody pushed for our ShareID
//!
//! # Correlation
//!
//! The wire format has no request identifier. At most one announce and one push
//! may be outstanding at a time, and responses are matched by action alone. The
//! `PendingRequests` table enforces this and guarantees a response is handed to at
//! most one waiter.

/// Enumerations for tracker actions, errors and peer state.
pub mod enums;

/// Implementation blocks for the tracker client and its messages.
pub mod impls;

/// Data structures for the tracker client and wire messages.
pub mod structs;

/// Seams used by the background tasks to send through the tracker client.
pub mod traits;

/// Constants and wire helpers shared by the tracker module.
#[allow(clippy::module_inception)]
pub mod tracker;

/// Shared type aliases.
pub mod types;
