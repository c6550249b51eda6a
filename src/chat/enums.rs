//! Chat enumerations.

/// Which side ended the relay.
pub mod relay_end;
