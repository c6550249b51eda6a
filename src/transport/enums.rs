//! Transport enumerations.

/// Errors raised while opening or accepting streams.
pub mod transport_error;
