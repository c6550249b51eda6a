//! Listener implementation blocks.

/// Receive loop and dispatch.
pub mod response_listener;
