//! Keepalive data structures.

/// The periodic pulse task.
pub mod keepalive_loop;
