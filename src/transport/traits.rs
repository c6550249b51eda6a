//! Transport traits.

/// Open and accept streams.
pub mod stream_transport;
