//! Negotiator data structures.

/// The push retry state machine.
pub mod connect_negotiator;
