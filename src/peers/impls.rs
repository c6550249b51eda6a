//! Peer book implementation blocks.

/// Record and lookup operations.
pub mod peer_book;
