//! Session enumerations.

/// Notifications sent to the session owner.
pub mod session_event;

/// Errors returned by session operations.
pub mod session_error;
