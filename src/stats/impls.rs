//! Statistics implementation blocks.

/// Counter updates and snapshots.
pub mod stats_atomics;
