//! Peer book module.
//!
//! Remembers every peer this session learned about, either by resolving its
//! ShareID through a push or because the tracker told us it asked for ours
//! (`income`). Entries live for the session only.

/// Enumerations (where a peer entry came from).
pub mod enums;

/// Implementation blocks for the peer book.
pub mod impls;

/// Peer book data structures.
pub mod structs;

/// Unit tests for the peer book.
pub mod tests;
