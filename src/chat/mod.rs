//! Chat relay.
//!
//! Copies lines between a peer stream and the terminal: remote lines are printed
//! in green followed by a `> ` prompt, typed lines are sent with a trailing
//! newline. The relay ends when either side closes.

/// The line relay.
#[allow(clippy::module_inception)]
pub mod chat;

/// How a relay ended.
pub mod enums;

/// Unit tests for the relay.
pub mod tests;
