//! Protocol activity counters.
//!
//! Every background task of a session shares one `StatsAtomics` and bumps the
//! counter matching what it just did. The console loop in the binary prints a
//! snapshot on an interval.
//!
//! # Counters
//!
//! - datagrams received, malformed, unsolicited and late responses dropped
//! - announces, pulses and pushes sent
//! - pulse failures, pushes resolved and abandoned
//! - incoming peer notices
//!
//! # Thread Safety
//!
//! All counters are atomic integers, so tasks update them without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use sobani::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::PulsesSent, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
