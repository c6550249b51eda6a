//! Transport implementation blocks.

/// TCP connect and accept.
pub mod tcp_stream_transport;
