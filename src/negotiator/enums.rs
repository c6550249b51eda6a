//! Negotiator enumerations.

/// Where a negotiation stands.
pub mod negotiator_state;

/// Why a negotiation gave up.
pub mod abandon_reason;

/// Errors returned by `negotiate`.
pub mod negotiation_error;
