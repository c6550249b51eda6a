//! Transport data structures.

/// TCP implementation of the stream transport.
pub mod tcp_stream_transport;
