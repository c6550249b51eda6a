//! Tracker data structures.

/// A decoded or to-be-encoded tracker message.
pub mod tracker_message;

/// UDP tracker client owning the socket.
pub mod tracker_client;

/// Local registration record.
pub mod peer_record;

/// Tracker-issued peer identifier.
pub mod share_id;

/// Endpoint returned for a resolved peer.
pub mod resolved_peer_address;

/// Outstanding request correlation table.
pub mod pending_requests;
