//! Configuration implementation blocks.

/// Loading, saving, overrides and validation.
pub mod configuration;

/// Display and Error for configuration errors.
pub mod configuration_error;

/// Section defaults.
pub mod section_defaults;
