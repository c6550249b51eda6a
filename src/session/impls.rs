//! Session implementation blocks.

/// Start, resolve, connect and close.
pub mod session;

/// Fatality of session errors.
pub mod session_error;
