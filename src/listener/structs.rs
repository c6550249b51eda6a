//! Listener data structures.

/// The receive loop and the handles it routes into.
pub mod response_listener;
