//! Tracker traits.

/// Send-side seam used by keepalive and negotiation.
pub mod tracker_sender;
