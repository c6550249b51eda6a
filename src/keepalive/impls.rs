//! Keepalive implementation blocks.

/// The pulse loop.
pub mod keepalive_loop;
