//! Negotiator implementation blocks.

/// Display for abandon reasons.
pub mod abandon_reason;

/// The retry loop.
pub mod connect_negotiator;
