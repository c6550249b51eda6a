//! Peer book data structures.

/// The book itself.
pub mod peer_book;

/// One remembered peer.
pub mod known_peer;
