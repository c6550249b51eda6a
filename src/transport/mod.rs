//! Stream transport collaborator.
//!
//! The rendezvous core only hands out a resolved address; this module turns it
//! into a byte stream. `StreamTransport` is the seam, `TcpStreamTransport` the
//! implementation the binary uses: it connects to `host:port` or
//! `/ip4/<ip>/tcp/<port>` endpoints and accepts incoming connections on the
//! local peer port.

/// Transport errors.
pub mod enums;

/// Implementation blocks for the TCP transport.
pub mod impls;

/// Transport data structures.
pub mod structs;

/// The transport seam.
pub mod traits;

/// Endpoint parsing and constants.
#[allow(clippy::module_inception)]
pub mod transport;
