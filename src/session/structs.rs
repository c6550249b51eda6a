//! Session data structures.

/// The session object.
pub mod session;
