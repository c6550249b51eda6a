//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Tracker address and registration timing.
pub mod tracker_config;

/// Push retry policy used when resolving a remote peer.
pub mod negotiator_config;

/// Local socket settings.
pub mod peer_config;
