//! Peer book enumerations.

/// How a peer ended up in the book.
pub mod peer_origin;
