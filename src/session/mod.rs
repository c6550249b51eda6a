//! Session module.
//!
//! A `Session` is the one object that owns everything a running client needs:
//! the tracker client and its socket, the configuration, the pending-request
//! table, the stats counters and the peer book. Background tasks get `Arc`
//! handles and a shutdown receiver; nothing lives in globals.
//!
//! # Lifecycle
//!
//! 1. `Session::start` opens the socket and spawns the response listener
//! 2. it announces; a failed announce closes everything and is returned
//! 3. the keepalive loop is spawned
//! 4. `resolve_peer` / `connect` run one negotiation at a time
//! 5. `close` signals shutdown, closes the client and joins every task
//!
//! Owners learn about incoming peers and fatal background failures through the
//! event receiver returned by `start`.

/// Session events and errors.
pub mod enums;

/// Implementation blocks for the session.
pub mod impls;

/// Session data structures.
pub mod structs;
