//! Statistics enumerations.

/// Counter selector passed to `update_stats`.
pub mod stats_event;
